//! Retry logic with exponential backoff for service operations.
//!
//! This module provides the `RetryContext` for executing operations with automatic retry
//! logic and exponential backoff. The error system decides which failures are transient
//! through [`Error::to_retry_strategy`], everything else fails on the first attempt.

use std::{future::Future, pin::Pin, time::Duration};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Boxed future returned by a retryable operation
pub type RetryFuture<R> = Pin<Box<dyn Future<Output = Result<R, Error>> + Send>>;

/// Context for service methods providing retry logic
pub struct RetryContext {
    /// Max attempts before failure
    max_attempts: u32,
    /// Initial backoff between attempts, doubled after every retry
    initial_backoff: Duration,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }

    /// Overrides the backoff before the first retry
    pub fn with_initial_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    /// Execute a method with automatic retry logic
    ///
    /// The operation is called once per attempt and must build a fresh future each time, so
    /// anything it moves into the future has to be cloned inside the closure.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "get planet ID 1")
    /// - `operation`: Async function performing the database work
    pub async fn execute_with_retry<R, F>(&self, description: &str, operation: F) -> Result<R, Error>
    where
        F: Fn() -> RetryFuture<R>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}
