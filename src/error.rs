//! # Error Types
//!
//! Every driver failure is surfaced as a single [`CustomerServiceError::Database`]
//! carrying the operation name and the original `sqlx` cause. There is no retry
//! or recovery path: callers propagate the error and fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomerServiceError {
    #[error("Database error: {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Connection timed out: {operation} after {timeout_seconds}s")]
    ConnectTimeout {
        operation: &'static str,
        timeout_seconds: u64,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[cfg(feature = "test-helpers")]
    #[error("Container error: {operation}: {source}")]
    Container {
        operation: &'static str,
        #[source]
        source: testcontainers_modules::testcontainers::TestcontainersError,
    },
}

impl CustomerServiceError {
    pub fn database(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Database { operation, source }
    }

    /// True when the database rejected a write because of a primary key or
    /// unique constraint, e.g. inserting a customer id that already exists.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database {
                source: sqlx::Error::Database(db_error),
                ..
            } => db_error.is_unique_violation(),
            _ => false,
        }
    }
}

impl From<config::ConfigError> for CustomerServiceError {
    fn from(error: config::ConfigError) -> Self {
        Self::Configuration(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CustomerServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display_names_operation() {
        let error = CustomerServiceError::database("get_customer", sqlx::Error::RowNotFound);
        let message = error.to_string();
        assert!(message.starts_with("Database error: get_customer:"));
    }

    #[test]
    fn test_database_error_keeps_source() {
        use std::error::Error as _;

        let error = CustomerServiceError::database("create_customer", sqlx::Error::PoolClosed);
        let source = error.source().expect("source should be preserved");
        assert_eq!(source.to_string(), sqlx::Error::PoolClosed.to_string());
    }

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!CustomerServiceError::Configuration("bad url".into()).is_unique_violation());
        assert!(
            !CustomerServiceError::database("create_customer", sqlx::Error::RowNotFound)
                .is_unique_violation()
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let error: CustomerServiceError = config::ConfigError::NotFound("url".into()).into();
        assert!(matches!(error, CustomerServiceError::Configuration(_)));
    }
}
