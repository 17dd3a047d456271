pub mod error;
pub mod extractor;
pub mod models;

pub use error::ExtractError;
pub use extractor::ResultExtractor;
pub use models::{ExtractionResult, ExtractorConfig, Verdict};
