use thiserror::Error;

/// Startup configuration failures, reported before the server binds
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: &'static str, reason: String },
}
