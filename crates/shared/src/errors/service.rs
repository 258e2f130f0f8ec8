use crate::errors::repository::RepositoryError;
use thiserror::Error;

/// Faults surfaced by services. Recoverable domain failures (validation,
/// not-found, duplicates) never land here; handlers fold those into error
/// envelopes instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}
