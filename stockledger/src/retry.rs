//! Retry logic and policies for ledger mutations.
//!
//! This module contains the retry configuration and policies used to handle
//! revision conflicts and transient store failures during read-modify-write
//! operations.

use crate::errors::StoreError;
use rand::Rng;
use std::time::Duration;

/// Configuration for mutation retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,
    /// Base delay between retry attempts.
    pub base_delay: Duration,
    /// Maximum delay between retry attempts (for exponential backoff).
    pub max_delay: Duration,
    /// Multiplier for exponential backoff.
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Computes the jittered delay to sleep before retrying after the given
    /// zero-based attempt.
    ///
    /// Full jitter: uniform in `[0, min(max_delay, base * multiplier^attempt)]`,
    /// so concurrent writers that conflicted on the same document do not
    /// conflict again in lockstep.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let ceiling = self
            .base_delay
            .mul_f64(self.backoff_multiplier.powi(exponent))
            .min(self.max_delay);

        let ceiling_micros = u64::try_from(ceiling.as_micros()).unwrap_or(u64::MAX);
        if ceiling_micros == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(rand::rng().random_range(0..=ceiling_micros))
    }
}

/// Policy defining which store errors should trigger a retry.
#[derive(Debug, Clone)]
pub enum RetryPolicy {
    /// Only retry on revision conflicts.
    ConflictsOnly,
    /// Retry on revision conflicts and transient store failures.
    ConflictsAndTransient,
    /// Custom policy with user-defined predicate.
    Custom(fn(&StoreError) -> bool),
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::ConflictsOnly
    }
}

impl RetryPolicy {
    /// Determines if an error should trigger a retry.
    pub fn should_retry(&self, error: &StoreError) -> bool {
        match self {
            Self::ConflictsOnly => {
                matches!(error, StoreError::RevisionConflict { .. })
            }
            Self::ConflictsAndTransient => {
                matches!(
                    error,
                    StoreError::RevisionConflict { .. }
                        | StoreError::Timeout(_)
                        | StoreError::Unavailable(_)
                )
            }
            Self::Custom(predicate) => predicate(error),
        }
    }
}
