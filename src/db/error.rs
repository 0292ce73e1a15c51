use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("todo {0} not found")]
    NotFound(i64),

    #[error("invalid todo: {0}")]
    Validation(String),

    #[error("persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl RepositoryError {
    /// Constraint violations are the store rejecting the record itself,
    /// everything else is a failure of the store.
    pub(crate) fn from_write(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db)
                if matches!(
                    db.kind(),
                    ErrorKind::CheckViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::UniqueViolation
                ) =>
            {
                RepositoryError::Validation(db.message().to_string())
            }
            _ => RepositoryError::Persistence(err),
        }
    }
}
