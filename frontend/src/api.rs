use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{AnalysisError, CanonicalResult, PipelineConfig, interpret_failure, interpret_success};
use web_sys::FormData;

/// Posts `file` to the prediction service and normalizes the reply.
///
/// No timeout or retry: the future runs until the service answers or the
/// transport gives up.
pub async fn submit(config: &PipelineConfig, file: &GlooFile) -> Result<CanonicalResult, AnalysisError> {
    let form_data = FormData::new().map_err(|e| network_failure("could not create form data", e))?;
    let raw: &web_sys::File = file.as_ref();
    form_data
        .append_with_blob_and_filename(&config.upload_field, raw, &file.name())
        .map_err(|e| network_failure("could not attach file", e))?;

    log::info!("Sending request to: {}", config.endpoint);
    let response = Request::post(&config.endpoint)
        .body(form_data)
        .map_err(|e| AnalysisError::NetworkFailure(e.to_string()))?
        .send()
        .await
        .map_err(|e| AnalysisError::NetworkFailure(e.to_string()))?;

    let status = response.status();
    log::info!("Response status: {}", status);
    let body = response.text().await;

    if response.ok() {
        let body = body.map_err(|e| AnalysisError::NetworkFailure(e.to_string()))?;
        interpret_success(status, &body)
    } else {
        Err(interpret_failure(status, &response.status_text(), &body.unwrap_or_default()))
    }
}

fn network_failure(context: &str, err: wasm_bindgen::JsValue) -> AnalysisError {
    AnalysisError::NetworkFailure(format!("{context}: {err:?}"))
}
