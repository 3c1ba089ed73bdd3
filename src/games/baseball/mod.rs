//! Number baseball: guess a secret of three distinct digits.
//!
//! Each guess is scored in strikes (right digit, right place) and balls
//! (right digit, wrong place) until all three are strikes.

mod error;
pub mod invariants;
mod rules;
mod secret;
mod session;
mod types;
mod validator;

pub use error::{ConfigurationError, ValidationError};
pub use rules::{ScoreResult, score};
pub use secret::generate_secret;
pub use session::GameSession;
pub use types::{ANSWER_STRIKE_COUNT, ANSWERS_COUNT, Digit, MAX_NUMBER, MIN_NUMBER, Triple};
pub use validator::GuessValidator;
