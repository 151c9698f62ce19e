use thiserror::Error;

use crate::repository::RepositoryError;

pub mod extraction;
pub mod jobs;
pub mod preferences;
pub mod recommendations;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced to route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("resource not found")]
    NotFound,
    #[error("{0}")]
    Form(String),
    #[error("duplicate resource")]
    Conflict,
    #[error("repository failure: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::Conflict,
            other => ServiceError::Repository(other),
        }
    }
}
