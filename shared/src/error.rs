use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Please select a valid image file")]
    NotAnImage,
    #[error("File size must be less than 10MB")]
    TooLarge { size: u64 },
}

/// Every way an analysis can fail. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    InvalidSelection(#[from] SelectionError),
    #[error("Analysis failed: Network error: {0}")]
    NetworkFailure(String),
    #[error("Analysis failed: Server error: {status} - {message}")]
    ServiceError { status: u16, message: String },
    #[error("Invalid response format from server")]
    MalformedResponse,
    #[error("No prediction received from server")]
    NoPrediction,
}
