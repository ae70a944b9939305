/// Largest upload the service accepts, 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const DEFAULT_ENDPOINT: &str = "https://tumor-scope-backend.up.railway.app/predict";

/// Multipart field the prediction service reads the image from.
pub const UPLOAD_FIELD: &str = "file";

/// Statically known settings for one pipeline instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub endpoint: String,
    pub upload_field: String,
    pub max_upload_bytes: u64,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub bar_stagger_ms: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            upload_field: UPLOAD_FIELD.to_string(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            counter_duration_ms: 1200,
            counter_tick_ms: 16,
            bar_stagger_ms: 100,
        }
    }
}
