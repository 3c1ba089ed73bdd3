//! Number baseball library - a type-safe guessing game engine
//!
//! A secret of three distinct digits is drawn; each guess is scored in
//! strikes (right digit, right place) and balls (right digit, wrong place).
//!
//! # Architecture
//!
//! - **Engine**: guess validation, secret generation, scoring and the
//!   game session ([`GameSession`]). No I/O.
//! - **Controller**: presentation adapter that renders engine results
//!   as status text for any front end.
//! - **Line mode**: a stdin/stdout front end built on the controller.
//! - **Settings**: TOML-backed player settings.
//!
//! # Example
//!
//! ```
//! use number_baseball::{GameSession, GuessValidator, ScoreResult};
//!
//! let session = GameSession::with_secret(&[1, 2, 3]).unwrap();
//! let guess = GuessValidator::parse("321").unwrap();
//! assert_eq!(session.submit(guess), ScoreResult::Partial { strike: 1, ball: 2 });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod controller;
mod games;
mod settings;

pub mod line_mode;

// Crate-level exports - Engine
pub use games::baseball::{
    ANSWER_STRIKE_COUNT, ANSWERS_COUNT, ConfigurationError, Digit, GameSession, GuessValidator,
    MAX_NUMBER, MIN_NUMBER, ScoreResult, Triple, ValidationError, generate_secret, invariants,
    score,
};

// Crate-level exports - Presentation adapter
pub use controller::{
    Controller, GuessRecord, RESET_MESSAGE, REVEAL_DISABLED_MESSAGE, SOLVED_MESSAGE,
    WELCOME_MESSAGE, render_answer, render_score, render_validation_error,
};

// Crate-level exports - Settings
pub use settings::{Settings, SettingsError};
