use thiserror::Error;

/// Errors surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,
    /// The operation would violate an integrity rule; the message is safe
    /// to show to API callers.
    #[error("{0}")]
    Conflict(String),
    /// A connection could not be checked out of the pool.
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            err => RepositoryError::Database(err),
        }
    }
}
