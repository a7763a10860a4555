use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient connection issues)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient, should retry
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // All other database errors are permanent failures:
                // - Query errors (constraint violations, missing tables, etc.)
                // - Type conversion errors
                // - Record not found/inserted/updated
                _ => ErrorRetryStrategy::Fail,
            },

            // IO errors - transient, could be a dropped connection
            Self::IoError(_) => ErrorRetryStrategy::Retry,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::AdminError(_) => ErrorRetryStrategy::Fail,
            Self::PasswordHashError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
