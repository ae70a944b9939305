use serde_json::json;
use shared::{
    AnalysisError, Candidate, Condition, PipelineConfig, Session, TumorClass, interpret_failure,
    interpret_success, present,
};

fn session_with_preview(config: &PipelineConfig) -> (Session<Vec<u8>>, u64) {
    let mut session = Session::new(config.max_upload_bytes);
    let bytes = vec![0x89, b'P', b'N', b'G'];
    let size = bytes.len() as u64;
    let generation = session
        .select(Candidate::new(bytes, "scan.png", "image/png", size))
        .expect("valid image");
    session.attach_preview(generation, "data:image/png;base64,iVBORw==".to_string());
    (session, generation)
}

#[test]
fn glioma_result_flows_to_banner_and_bars() {
    let config = PipelineConfig::default();
    let (mut session, generation) = session_with_preview(&config);

    let (started, selection) = session.begin_submission().expect("submit enabled");
    assert_eq!(selection.file().len(), 4);

    let body = json!({
        "predicted_class": "glioma_tumor",
        "probabilities": { "glioma": 0.7, "meningioma": 0.2, "pituitary": 0.1 }
    })
    .to_string();
    assert!(session.finish_submission(started, interpret_success(200, &body)));
    assert_eq!(started, generation);

    let shown = present(session.result().expect("result shown"), &config);
    assert_eq!(shown.condition, Condition::Tumor(TumorClass::Glioma));
    assert_eq!(shown.condition.summary(), "Tumor Detected — Glioma");
    let percents: Vec<u32> = shown.bars.iter().map(|bar| bar.percent).collect();
    assert_eq!(percents, vec![70, 20, 10]);
    assert!(shown.explanation_uri.is_none());
}

#[test]
fn suffixed_healthy_result_in_service_shape() {
    let config = PipelineConfig::default();
    let (mut session, _) = session_with_preview(&config);
    let (started, _) = session.begin_submission().expect("submit enabled");

    let body = json!({
        "status": "success",
        "probability_distribution": {
            "healthy": 0.7,
            "glioma_tumor": 0.1,
            "meningioma_tumor": 0.1,
            "pituitary_tumor": 0.1
        },
        "predicted_class": "no_tumor",
        "gradcam_heatmap": [[0, 0], [0, 0]]
    })
    .to_string();
    session.finish_submission(started, interpret_success(200, &body));

    let result = session.result().expect("result shown");
    assert!(result.probabilities.iter().all(|(_, p)| p == 0.1));
    let shown = present(result, &config);
    assert_eq!(shown.condition.summary(), "Healthy");
    assert!(shown.explanation_uri.is_none());
}

#[test]
fn missing_prediction_suppresses_banner() {
    let config = PipelineConfig::default();
    let (mut session, _) = session_with_preview(&config);
    let (started, _) = session.begin_submission().expect("submit enabled");

    let body = r#"{"probabilities":{"glioma":0.2,"meningioma":0.5,"pituitary":0.3}}"#;
    let outcome = interpret_success(200, body);
    assert_eq!(outcome, Err(AnalysisError::NoPrediction));
    session.finish_submission(started, outcome);

    assert!(session.result().is_none());
    assert_eq!(session.error(), Some("No prediction received from server"));
    assert!(session.affordances().submit_enabled);
}

#[test]
fn service_error_then_removal_restores_idle_state() {
    let config = PipelineConfig::default();
    let (mut session, _) = session_with_preview(&config);

    let (started, _) = session.begin_submission().expect("submit enabled");
    let body = json!({ "predicted_class": "pituitary", "probabilities": { "pituitary": 0.9 }, "gradcam_image": "AAAA" });
    session.finish_submission(started, interpret_success(200, &body.to_string()));
    assert!(present(session.result().unwrap(), &config).explanation_uri.is_some());

    let (started, _) = session.begin_submission().expect("submit enabled again");
    session.finish_submission(started, Err(interpret_failure(503, "Service Unavailable", "")));
    assert_eq!(
        session.error(),
        Some("Analysis failed: Server error: 503 - Service Unavailable")
    );

    session.remove();
    assert!(session.error().is_none());
    assert!(session.result().is_none());
    assert!(!session.affordances().submit_enabled);
}

#[test]
fn oversized_upload_is_refused() {
    let config = PipelineConfig::default();
    let mut session: Session<Vec<u8>> = Session::new(config.max_upload_bytes);
    let err = session
        .select(Candidate::new(Vec::new(), "huge.png", "image/png", config.max_upload_bytes + 1))
        .unwrap_err();
    assert_eq!(AnalysisError::from(err).to_string(), "File size must be less than 10MB");
    assert!(session.selection().is_none());
}
