use super::super::{Model, Msg};
use crate::api;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::read_as_data_url;
use shared::{AnalysisError, Candidate, CanonicalResult};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let candidate = Candidate::new(file.clone(), file.name(), file.raw_mime_type(), file.size());

    let generation = match model.session.select(candidate) {
        Ok(generation) => generation,
        // the session already holds the message to show
        Err(_) => return true,
    };

    // dropping the previous reader aborts a preview still in progress
    let link = ctx.link().clone();
    model.preview_reader = Some(read_as_data_url(&file, move |result| {
        link.send_message(Msg::PreviewReady(generation, result.map_err(|e| format!("{e:?}"))));
    }));

    true
}

pub fn handle_preview_ready(model: &mut Model, generation: u64, preview: Result<String, String>) -> bool {
    if generation != model.session.generation() {
        return false;
    }
    model.preview_reader = None;

    match preview {
        Ok(uri) => model.session.attach_preview(generation, uri),
        Err(e) => {
            log::error!("Failed to read selected file: {}", e);
            model.session.report_error("Could not read the selected file");
            true
        }
    }
}

pub fn handle_remove_file(model: &mut Model) -> bool {
    model.preview_reader = None;
    model.session.remove();
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some((generation, selection)) = model.session.begin_submission() else {
        log::warn!("Analyze requested while not ready");
        return false;
    };

    let file = selection.file().clone();
    let config = model.config.clone();
    let link = ctx.link().clone();

    spawn_local(async move {
        let outcome = api::submit(&config, &file).await;
        link.send_message(Msg::AnalysisFinished(generation, outcome));
    });

    true
}

pub fn handle_analysis_finished(
    model: &mut Model,
    generation: u64,
    outcome: Result<CanonicalResult, AnalysisError>,
) -> bool {
    if let Ok(result) = &outcome {
        log::info!("Analysis result: {}", result.predicted_label);
    }
    model.session.finish_submission(generation, outcome);
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let dropped = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| file_list.item(0));

    match dropped {
        Some(file) if file.type_().starts_with("image/") => {
            ctx.link().send_message(Msg::FileChosen(GlooFile::from(file)));
        }
        _ => model.session.report_error("Please upload an image file"),
    }

    true
}
