use bookshelf_request::error::SqlError;
use deadpool_postgres::{BuildError, PoolError};
use thiserror::Error;
use tracing::error;

/// Application error types.
///
/// Represents all possible errors that can occur in the bookshelf service.
/// None of them are recovered from locally; they fail the current request.
#[derive(Debug, Error)]
pub enum AppError {
    /// Internal application error.
    ///
    /// Represents unexpected internal errors that occur during service operation.
    #[error("internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// Data access error raised by the database.
    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    /// No connection could be taken from the pool.
    #[error("pool error: {0}")]
    Pool(#[from] PoolError),

    /// Statement could not be built.
    #[error("sql error: {0}")]
    Sql(#[from] SqlError),
}

/// Application result type.
///
/// Type alias for Result with `AppError` as the error type.
/// Used throughout the application for consistent error handling.
pub type AppResult<T> = Result<T, AppError>;

macro_rules! impl_internal_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                AppError::Internal(Box::new(err))
            }
        }
        )*
    };
}
impl_internal_errors!(config::ConfigError, BuildError, std::io::Error);

impl AppError {
    /// Converts the error into a GraphQL error for clients.
    ///
    /// Details stay in the logs; clients see a generic message.
    pub fn into_graphql_error(self) -> async_graphql::Error {
        error!("request failed: {}", self);
        async_graphql::Error::new(INTERNAL_ERROR_MESSAGE)
    }
}

pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_details() {
        let err = AppError::from(SqlError::MissingTable);
        assert_eq!(err.to_string(), "sql error: no table selected");
        assert_eq!(err.into_graphql_error().message, INTERNAL_ERROR_MESSAGE);
    }
}
