//! Raw text to guess conversion.

use super::error::ValidationError;
use super::invariants::all_distinct;
use super::types::{ANSWERS_COUNT, Digit, Triple};
use tracing::instrument;

/// Converts player input into a [`Triple`].
pub struct GuessValidator;

impl GuessValidator {
    /// Parses raw text into a guess.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// length (in characters), then digit-ness of every character, then
    /// distinctness. The text is taken as-is; callers trim if they want to.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failing check.
    #[instrument(level = "trace", ret)]
    pub fn parse(raw: &str) -> Result<Triple, ValidationError> {
        let chars: Vec<char> = raw.chars().collect();
        if chars.len() != ANSWERS_COUNT {
            return Err(ValidationError::InvalidLength);
        }

        let mut digits = [Digit::ZERO; ANSWERS_COUNT];
        for (slot, &c) in digits.iter_mut().zip(&chars) {
            *slot = Digit::from_char(c).ok_or(ValidationError::NonDigitCharacter)?;
        }

        if !all_distinct(&digits) {
            return Err(ValidationError::DuplicateDigit);
        }

        Ok(Triple::from_digits(digits))
    }
}
