//! First-class invariants for number baseball secrets.
//!
//! A secret (and, by shape, every guess) must be exactly three values,
//! each a digit, none repeated. Each property is its own invariant so a
//! rejected candidate reports every rule it breaks.

use super::types::{ANSWERS_COUNT, MAX_NUMBER, MIN_NUMBER};

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S: ?Sized> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    S: ?Sized,
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: exactly `ANSWERS_COUNT` values.
pub struct ExactCount;

impl Invariant<[u8]> for ExactCount {
    fn holds(values: &[u8]) -> bool {
        values.len() == ANSWERS_COUNT
    }

    fn description() -> &'static str {
        "Secret must consist of exactly three digits"
    }
}

/// Invariant: every value lies in `[MIN_NUMBER, MAX_NUMBER)`.
pub struct DigitsInRange;

impl Invariant<[u8]> for DigitsInRange {
    fn holds(values: &[u8]) -> bool {
        values
            .iter()
            .all(|v| (MIN_NUMBER..MAX_NUMBER).contains(v))
    }

    fn description() -> &'static str {
        "Secret digits must be between 0 and 9"
    }
}

/// Invariant: no value appears twice.
pub struct DistinctDigits;

impl Invariant<[u8]> for DistinctDigits {
    fn holds(values: &[u8]) -> bool {
        all_distinct(values)
    }

    fn description() -> &'static str {
        "Secret digits must not repeat"
    }
}

/// All secret invariants as a composable set.
pub type SecretInvariants = (ExactCount, DigitsInRange, DistinctDigits);

/// Returns true when no two items compare equal.
pub(crate) fn all_distinct<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| a != b))
}
