//! Error type for timestamp corrections.

use thiserror::Error;

/// Errors from true-solar-time arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The corrected timestamp falls outside the representable range.
    #[error("corrected timestamp out of range (correction {minutes} minutes)")]
    OutOfRange {
        /// The correction that overflowed, in whole minutes.
        minutes: i64,
    },
}
