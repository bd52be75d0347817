use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaktabError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // A required input collection could not be fetched. Callers must treat
    // this as "no information", never as "no availability".
    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type MaktabResult<T> = Result<T, MaktabError>;
