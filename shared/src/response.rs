use crate::classes::TumorClass;
use crate::error::AnalysisError;
use crate::explanation;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use strum::IntoEnumIterator;

/// Body of a `/predict` reply as sent over the wire. Every field is optional;
/// [`normalize`] decides what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawServiceResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub predicted_class: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub probability_distribution: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub probabilities: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub gradcam_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub gradcam_heatmap: Option<Vec<Vec<f64>>>,
}

/// A field of the wrong shape reads as absent instead of failing the body.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match Option::<T>::deserialize(value) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            log::warn!("Ignoring response field with unexpected shape: {e}");
            Ok(None)
        }
    }
}

/// Probability per known class. Always holds exactly the three classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Probabilities([f64; TumorClass::COUNT]);

impl Probabilities {
    pub fn new(glioma: f64, meningioma: f64, pituitary: f64) -> Self {
        Self([glioma, meningioma, pituitary].map(clamp_probability))
    }

    pub fn get(&self, class: TumorClass) -> f64 {
        self.0[class.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TumorClass, f64)> + '_ {
        TumorClass::iter().map(move |class| (class, self.get(class)))
    }

    fn set(&mut self, class: TumorClass, value: f64) {
        self.0[class.index()] = clamp_probability(value);
    }
}

fn clamp_probability(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalResult {
    pub predicted_label: String,
    pub probabilities: Probabilities,
    /// Base64 PNG, ready to be wrapped in a data URI.
    pub explanation_image: Option<String>,
}

/// Turns a raw reply into a [`CanonicalResult`].
///
/// `probability_distribution` wins over `probabilities`; inside the chosen map
/// the bare class key wins over the `_tumor` key, and a class found under
/// neither is 0. A missing probability map is checked before a missing label.
pub fn normalize(raw: RawServiceResponse) -> Result<CanonicalResult, AnalysisError> {
    let source = raw
        .probability_distribution
        .or(raw.probabilities)
        .ok_or(AnalysisError::MalformedResponse)?;

    let predicted_label = raw
        .predicted_class
        .filter(|label| !label.trim().is_empty())
        .ok_or(AnalysisError::NoPrediction)?;

    let mut probabilities = Probabilities::default();
    for class in TumorClass::iter() {
        let value = lookup(&source, class.key())
            .or_else(|| lookup(&source, &class.suffixed_key()))
            .unwrap_or(0.0);
        probabilities.set(class, value);
    }

    let explanation_image = match raw.gradcam_image.filter(|image| !image.is_empty()) {
        Some(image) if explanation::is_valid_base64(&image) => Some(image),
        Some(_) => {
            log::warn!("Dropping explanation image that is not valid base64");
            None
        }
        None => raw.gradcam_heatmap.as_deref().and_then(explanation::heatmap_to_base64_png),
    };

    log::debug!("Normalized prediction {predicted_label}: {probabilities:?}");

    Ok(CanonicalResult {
        predicted_label,
        probabilities,
        explanation_image,
    })
}

fn lookup(source: &Map<String, Value>, key: &str) -> Option<f64> {
    source.get(key).and_then(Value::as_f64)
}

/// Interprets the body of a 2xx reply.
pub fn interpret_success(status: u16, body: &str) -> Result<CanonicalResult, AnalysisError> {
    let raw: RawServiceResponse = serde_json::from_str(body).map_err(|e| {
        log::warn!("Failed to parse prediction response: {e}");
        AnalysisError::MalformedResponse
    })?;

    if raw.status.as_deref() == Some("error") {
        return Err(AnalysisError::ServiceError {
            status,
            message: raw.message.unwrap_or_else(|| "Unknown error".to_string()),
        });
    }

    normalize(raw)
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Builds the error for a non-2xx reply. The message comes from a JSON
/// `message` field when there is one, else from the status text, else from
/// the standard reason phrase for `status`.
pub fn interpret_failure(status: u16, status_text: &str, body: &str) -> AnalysisError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
        .or_else(|| Some(status_text.trim().to_string()).filter(|text| !text.is_empty()))
        .unwrap_or_else(|| reason_phrase(status).to_string());

    AnalysisError::ServiceError { status, message }
}

// HTTP/2 responses carry no status text, so the browser reports it empty.
fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        413 => "Payload Too Large",
        415 => "Unsupported Media Type",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Unknown error",
    }
}
