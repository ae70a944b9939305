use crate::error::{AnalysisError, SelectionError};
use crate::response::CanonicalResult;
use crate::selection::{Candidate, Selection, validate};

/// Which controls are live. Fully derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub upload_visible: bool,
    pub preview_visible: bool,
    pub submit_enabled: bool,
    pub analyzing: bool,
}

/// The one live selection and everything shown for it.
///
/// Each accepted selection gets a new generation number. Preview reads and
/// submissions carry the generation they started with so that late
/// completions for a replaced or removed file are dropped.
#[derive(Debug)]
pub struct Session<F> {
    max_upload_bytes: u64,
    selection: Option<Selection<F>>,
    generation: u64,
    preview: Option<String>,
    in_flight: Option<u64>,
    result: Option<CanonicalResult>,
    run: u64,
    error: Option<String>,
}

impl<F> Session<F> {
    pub fn new(max_upload_bytes: u64) -> Self {
        Self {
            max_upload_bytes,
            selection: None,
            generation: 0,
            preview: None,
            in_flight: None,
            result: None,
            run: 0,
            error: None,
        }
    }

    /// Validates `candidate` and makes it the selection. A rejected candidate
    /// leaves the current selection alone and surfaces the reason.
    pub fn select(&mut self, candidate: Candidate<F>) -> Result<u64, SelectionError> {
        let selection = match validate(candidate, self.max_upload_bytes) {
            Ok(selection) => selection,
            Err(e) => {
                log::warn!("Rejected selection: {e}");
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        log::info!("Selected {} ({} bytes)", selection.name(), selection.size());
        self.generation += 1;
        self.selection = Some(selection);
        self.preview = None;
        self.result = None;
        self.error = None;
        Ok(self.generation)
    }

    /// Stores the decoded preview. Returns `false` if `generation` is stale.
    pub fn attach_preview(&mut self, generation: u64, uri: String) -> bool {
        if generation != self.generation || self.selection.is_none() {
            log::debug!("Ignoring preview for stale selection {generation}");
            return false;
        }
        self.preview = Some(uri);
        true
    }

    pub fn remove(&mut self) {
        self.selection = None;
        self.preview = None;
        self.result = None;
        self.error = None;
        // an outstanding submission still finishes, its result is dropped as stale
        self.generation += 1;
    }

    /// Claims the submit slot. `None` when there is nothing previewed to
    /// send or a submission is already outstanding.
    pub fn begin_submission(&mut self) -> Option<(u64, &Selection<F>)> {
        if self.in_flight.is_some() || self.preview.is_none() {
            return None;
        }
        let selection = self.selection.as_ref()?;
        self.in_flight = Some(self.generation);
        self.error = None;
        Some((self.generation, selection))
    }

    /// Records the outcome of the submission started for `generation`.
    /// Returns `false` when the outcome was dropped as stale.
    pub fn finish_submission(
        &mut self,
        generation: u64,
        outcome: Result<CanonicalResult, AnalysisError>,
    ) -> bool {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
        }
        if generation != self.generation {
            log::debug!("Dropping outcome for stale selection {generation}");
            return false;
        }

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.run += 1;
                self.error = None;
            }
            Err(e) => {
                log::error!("Analysis error: {e}");
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn affordances(&self) -> Affordances {
        let preview_visible = self.preview.is_some();
        let analyzing = self.in_flight.is_some();
        Affordances {
            upload_visible: !preview_visible,
            preview_visible,
            submit_enabled: preview_visible && !analyzing,
            analyzing,
        }
    }

    pub fn selection(&self) -> Option<&Selection<F>> {
        self.selection.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn result(&self) -> Option<&CanonicalResult> {
        self.result.as_ref()
    }

    /// Bumped for every result shown, so animations can restart.
    pub fn run(&self) -> u64 {
        self.run
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
