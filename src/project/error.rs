use thiserror::Error;

/// Failures surfaced by the project repository
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Input rejected before any write; storage is untouched
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("project {0} not found")]
    NotFound(i64),

    /// Engine failure, including constraint violations the validator missed
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
