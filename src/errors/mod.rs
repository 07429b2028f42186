pub mod types;
pub mod classification;

pub use types::{ExtractorError, FetchError};
pub use classification::ErrorClassification;
