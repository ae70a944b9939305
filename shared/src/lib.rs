//! Platform-independent half of the tumor scope client: file selection,
//! response normalization and the presentation model the browser renders.

pub mod classes;
pub mod config;
pub mod error;
pub mod explanation;
pub mod presentation;
pub mod response;
pub mod selection;
pub mod session;

pub use classes::TumorClass;
pub use config::PipelineConfig;
pub use error::{AnalysisError, SelectionError};
pub use presentation::{BarPlan, Condition, CounterAnimation, Presentation, present};
pub use response::{CanonicalResult, Probabilities, RawServiceResponse, interpret_failure, interpret_success, normalize};
pub use selection::{Candidate, Selection, validate};
pub use session::{Affordances, Session};
