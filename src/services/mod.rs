use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod customers;
pub mod orders;
pub mod products;

/// Errors surfaced by the service layer and translated into HTTP responses
/// at the route boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload failed field-level validation.
    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),
    /// A referenced entity (customer, product, order) does not resolve.
    #[error("{0}")]
    NotFound(String),
    /// The operation conflicts with existing state, e.g. a duplicate
    /// association or a restricted delete.
    #[error("{0}")]
    Conflict(String),
    /// Infrastructure failure inside the persistence layer.
    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Record not found".to_string()),
            RepositoryError::Conflict(message) => ServiceError::Conflict(message),
            err => ServiceError::Repository(err),
        }
    }
}
