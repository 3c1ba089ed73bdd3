//! Error types for number baseball.

use super::invariants::InvariantViolation;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Reason a raw guess was rejected.
///
/// Variants are listed in the order the checks run; the first failing
/// check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, strum::EnumIter)]
pub enum ValidationError {
    /// The input is not exactly three characters long.
    #[display("The input must consist of exactly three digits.")]
    InvalidLength,

    /// The input contains a character outside `0`-`9`.
    #[display("All inputs must be digits (0-9).")]
    NonDigitCharacter,

    /// The input repeats a digit.
    #[display("Digits must not repeat.")]
    DuplicateDigit,
}

/// A candidate secret failed its invariants outside of text parsing.
#[derive(Debug, Clone, Display, Error)]
#[display("Configuration error: {} at {}:{}", message, file, line)]
pub struct ConfigurationError {
    /// Joined descriptions of the violated invariants.
    pub message: String,
    /// Every invariant the candidate broke.
    pub violations: Vec<InvariantViolation>,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(violations))]
    pub fn new(violations: Vec<InvariantViolation>) -> Self {
        let loc = std::panic::Location::caller();
        let message = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        debug!(%message, "Rejected secret candidate");
        Self {
            message,
            violations,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
