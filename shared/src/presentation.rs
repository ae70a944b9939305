use crate::classes::TumorClass;
use crate::config::PipelineConfig;
use crate::explanation;
use crate::response::CanonicalResult;
use serde::{Deserialize, Serialize};

/// Outcome shown in the condition banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Tumor(TumorClass),
    Healthy,
}

impl Condition {
    pub fn from_label(label: &str) -> Self {
        TumorClass::from_label(label).map_or(Condition::Healthy, Condition::Tumor)
    }

    pub fn summary(&self) -> String {
        match self {
            Condition::Tumor(class) => format!("Tumor Detected — {}", class.title()),
            Condition::Healthy => "Healthy".to_string(),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Condition::Tumor(_) => "Tumor Detected",
            Condition::Healthy => "Condition: Healthy",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Condition::Tumor(class) => class.title(),
            Condition::Healthy => "No tumor detected",
        }
    }

    /// CSS modifier for the banner.
    pub fn css_class(&self) -> &'static str {
        match self {
            Condition::Tumor(_) => "tumor",
            Condition::Healthy => "healthy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Condition::Tumor(class) => class.description(),
            Condition::Healthy => "",
        }
    }
}

/// Numeric counter that climbs from 0 to `target` over `duration_ms`,
/// advancing once every `tick_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterAnimation {
    pub target: u32,
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl CounterAnimation {
    /// Ticks until the counter rests on `target`.
    pub fn total_ticks(&self) -> u32 {
        if self.tick_ms == 0 {
            return 1;
        }
        self.duration_ms.div_ceil(self.tick_ms).max(1)
    }

    /// Displayed value after `ticks` ticks. Never exceeds `target`.
    pub fn value_after_ticks(&self, ticks: u32) -> u32 {
        if ticks >= self.total_ticks() || self.duration_ms == 0 {
            return self.target;
        }
        let progress = (u64::from(ticks) * u64::from(self.tick_ms)) as f64 / f64::from(self.duration_ms);
        let current = (f64::from(self.target) * progress).min(f64::from(self.target));
        current.round() as u32
    }

    /// Displayed value `elapsed_ms` after the counter started.
    pub fn value_at(&self, elapsed_ms: u32) -> u32 {
        match elapsed_ms.checked_div(self.tick_ms) {
            Some(ticks) => self.value_after_ticks(ticks),
            None => self.target,
        }
    }

    pub fn is_finished(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.total_ticks().saturating_mul(self.tick_ms)
    }
}

/// How one probability bar animates in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPlan {
    pub class: TumorClass,
    pub percent: u32,
    pub delay_ms: u32,
    pub counter: CounterAnimation,
}

/// Everything the result panel renders, derived from one result.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub condition: Condition,
    pub description: &'static str,
    pub bars: Vec<BarPlan>,
    pub explanation_uri: Option<String>,
}

pub fn percent(probability: f64) -> u32 {
    (probability.clamp(0.0, 1.0) * 100.0).round() as u32
}

pub fn present(result: &CanonicalResult, config: &PipelineConfig) -> Presentation {
    let condition = Condition::from_label(&result.predicted_label);

    let bars = result
        .probabilities
        .iter()
        .map(|(class, probability)| {
            let percent = percent(probability);
            BarPlan {
                class,
                percent,
                delay_ms: class.index() as u32 * config.bar_stagger_ms,
                counter: CounterAnimation {
                    target: percent,
                    duration_ms: config.counter_duration_ms,
                    tick_ms: config.counter_tick_ms,
                },
            }
        })
        .collect();

    Presentation {
        condition,
        description: condition.description(),
        bars,
        explanation_uri: result.explanation_image.as_deref().map(explanation::data_uri),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Probabilities;

    fn result(label: &str, probabilities: Probabilities) -> CanonicalResult {
        CanonicalResult {
            predicted_label: label.to_string(),
            probabilities,
            explanation_image: None,
        }
    }

    #[test]
    fn tumor_label_shows_subtype() {
        let shown = present(&result("glioma_tumor", Probabilities::new(0.7, 0.2, 0.1)), &PipelineConfig::default());
        assert_eq!(shown.condition, Condition::Tumor(TumorClass::Glioma));
        assert_eq!(shown.condition.summary(), "Tumor Detected — Glioma");
        assert!(shown.description.starts_with("Glioma is a tumor"));
    }

    #[test]
    fn unknown_label_is_healthy() {
        let shown = present(&result("no_tumor", Probabilities::new(0.1, 0.1, 0.1)), &PipelineConfig::default());
        assert_eq!(shown.condition, Condition::Healthy);
        assert_eq!(shown.condition.summary(), "Healthy");
        assert_eq!(shown.condition.badge(), "No tumor detected");
        assert_eq!(shown.description, "");
    }

    #[test]
    fn bars_are_rounded_and_staggered() {
        let shown = present(&result("meningioma", Probabilities::new(0.724, 0.012, 0.271)), &PipelineConfig::default());
        let summary: Vec<_> = shown.bars.iter().map(|b| (b.class, b.percent, b.delay_ms)).collect();
        assert_eq!(
            summary,
            vec![
                (TumorClass::Glioma, 72, 0),
                (TumorClass::Meningioma, 1, 100),
                (TumorClass::Pituitary, 27, 200),
            ]
        );
        assert!(shown.bars.iter().all(|b| b.counter.target == b.percent && b.counter.duration_ms == 1200));
    }

    #[test]
    fn explanation_becomes_data_uri() {
        let mut with_image = result("pituitary", Probabilities::default());
        with_image.explanation_image = Some("AAAA".into());
        let shown = present(&with_image, &PipelineConfig::default());
        assert_eq!(shown.explanation_uri.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn counter_lands_exactly_on_target() {
        let counter = CounterAnimation { target: 72, duration_ms: 1200, tick_ms: 16 };
        assert_eq!(counter.total_ticks(), 75);

        let values: Vec<u32> = (0..=counter.total_ticks() + 5).map(|t| counter.value_after_ticks(t)).collect();
        assert_eq!(values[0], 0);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|&v| v <= 72));
        assert_eq!(values[75], 72);
        assert_eq!(*values.last().unwrap(), 72);
        assert!(values[74] < 72);
    }

    #[test]
    fn counter_over_elapsed_time() {
        let counter = CounterAnimation { target: 72, duration_ms: 1200, tick_ms: 16 };
        assert_eq!(counter.value_at(0), 0);
        assert_eq!(counter.value_at(15), 0);
        assert_eq!(counter.value_at(600), 36);
        assert_eq!(counter.value_at(1200), 72);
        assert_eq!(counter.value_at(5000), 72);
        assert!(!counter.is_finished(1199));
        assert!(counter.is_finished(1200));
    }

    #[test]
    fn uneven_duration_still_stops_at_target() {
        let counter = CounterAnimation { target: 100, duration_ms: 1000, tick_ms: 16 };
        assert_eq!(counter.total_ticks(), 63);
        assert!(counter.value_after_ticks(62) <= 100);
        assert_eq!(counter.value_after_ticks(63), 100);
    }

    #[test]
    fn degenerate_counters() {
        let zero = CounterAnimation { target: 0, duration_ms: 1200, tick_ms: 16 };
        assert!((0..80).all(|t| zero.value_after_ticks(t) == 0));

        let instant = CounterAnimation { target: 40, duration_ms: 0, tick_ms: 16 };
        assert_eq!(instant.value_after_ticks(0), 40);

        let no_tick = CounterAnimation { target: 40, duration_ms: 1200, tick_ms: 0 };
        assert_eq!(no_tick.value_at(0), 40);
    }
}
