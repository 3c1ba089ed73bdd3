//! Strike and ball scoring.

use super::types::{ANSWER_STRIKE_COUNT, ANSWERS_COUNT, Triple};
use tracing::instrument;

/// Outcome of scoring one guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreResult {
    /// Every digit is a strike.
    Solved,
    /// Not solved yet.
    Partial {
        /// Digits in the right position.
        strike: u8,
        /// Digits present in the secret at another position.
        ball: u8,
    },
}

impl ScoreResult {
    /// Returns true if the guess matched the secret.
    pub fn is_solved(&self) -> bool {
        matches!(self, ScoreResult::Solved)
    }

    /// Returns the strike count.
    pub fn strike(&self) -> u8 {
        match self {
            ScoreResult::Solved => ANSWER_STRIKE_COUNT,
            ScoreResult::Partial { strike, .. } => *strike,
        }
    }

    /// Returns the ball count.
    pub fn ball(&self) -> u8 {
        match self {
            ScoreResult::Solved => 0,
            ScoreResult::Partial { ball, .. } => *ball,
        }
    }
}

/// Scores `guess` against `secret`.
///
/// A position whose digits match is a strike; otherwise the guess digit is
/// a ball if it occurs anywhere in the secret. This relies on the secret
/// having distinct digits: a strike digit cannot also be found elsewhere.
#[instrument(level = "trace", ret)]
pub fn score(secret: &Triple, guess: &Triple) -> ScoreResult {
    let mut strike = 0;
    let mut ball = 0;

    for i in 0..ANSWERS_COUNT {
        let digit = guess.digits()[i];
        if digit == secret.digits()[i] {
            strike += 1;
        } else if secret.contains(digit) {
            ball += 1;
        }
    }

    debug_assert!(usize::from(strike + ball) <= ANSWERS_COUNT);

    if strike == ANSWER_STRIKE_COUNT {
        ScoreResult::Solved
    } else {
        ScoreResult::Partial { strike, ball }
    }
}
