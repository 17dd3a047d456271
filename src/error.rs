use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("container not found: {id}")]
    ContainerNotFound { id: String },

    #[error("invalid container selector: {0}")]
    InvalidSelector(String),
}
