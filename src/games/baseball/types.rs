//! Core domain types for number baseball.

use super::error::ConfigurationError;
use super::invariants::{InvariantSet, SecretInvariants};
use tracing::instrument;

/// Smallest digit value (inclusive).
pub const MIN_NUMBER: u8 = 0;

/// Upper digit bound (exclusive).
pub const MAX_NUMBER: u8 = 10;

/// Number of digits in a secret or a guess.
pub const ANSWERS_COUNT: usize = 3;

/// Strike count that means the guess matches the secret.
pub const ANSWER_STRIKE_COUNT: u8 = 3;

/// A single decimal digit in `[MIN_NUMBER, MAX_NUMBER)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub struct Digit(u8);

impl Digit {
    pub(crate) const ZERO: Digit = Digit(MIN_NUMBER);

    /// Creates a digit, or `None` if the value is out of range.
    pub fn new(value: u8) -> Option<Self> {
        (MIN_NUMBER..MAX_NUMBER)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Converts an ASCII decimal character (`'0'..='9'`).
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    /// Returns the numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Every digit in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (MIN_NUMBER..MAX_NUMBER).map(Digit)
    }
}

/// Three pairwise-distinct digits in a fixed order.
///
/// A `Triple` is only ever built by [`Triple::from_values`], the guess
/// validator, or the secret generator, so holding one means the count,
/// range and distinctness invariants already hold. The same shape serves
/// as the session secret and as a player's guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triple([Digit; ANSWERS_COUNT]);

impl Triple {
    /// Builds a triple from raw values, checking every secret invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] listing each violated invariant when
    /// `values` is not exactly three distinct digits in range.
    #[track_caller]
    #[instrument(level = "trace")]
    pub fn from_values(values: &[u8]) -> Result<Self, ConfigurationError> {
        if let Err(violations) = SecretInvariants::check_all(values) {
            return Err(ConfigurationError::new(violations));
        }

        let mut digits = [Digit::ZERO; ANSWERS_COUNT];
        for (slot, &value) in digits.iter_mut().zip(values) {
            *slot = Digit(value);
        }
        Ok(Self(digits))
    }

    /// Wraps digits whose distinctness the caller has already established.
    pub(crate) fn from_digits(digits: [Digit; ANSWERS_COUNT]) -> Self {
        let triple = Self(digits);
        debug_assert!(
            SecretInvariants::check_all(&triple.values()[..]).is_ok(),
            "triple built from repeated digits: {triple}"
        );
        triple
    }

    /// Returns the digits in order.
    pub fn digits(&self) -> &[Digit; ANSWERS_COUNT] {
        &self.0
    }

    /// Returns the digit values in order.
    pub fn values(&self) -> [u8; ANSWERS_COUNT] {
        self.0.map(Digit::value)
    }

    /// Returns true if `digit` appears at any position.
    pub fn contains(&self, digit: Digit) -> bool {
        self.0.contains(&digit)
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl TryFrom<[u8; ANSWERS_COUNT]> for Triple {
    type Error = ConfigurationError;

    #[track_caller]
    fn try_from(values: [u8; ANSWERS_COUNT]) -> Result<Self, Self::Error> {
        Self::from_values(&values)
    }
}

impl std::str::FromStr for Triple {
    type Err = super::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::GuessValidator::parse(s)
    }
}
