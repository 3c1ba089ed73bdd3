//! Presentation-side adapter around a [`GameSession`].
//!
//! Front ends (terminal UI, line mode) own a `Controller` and map their
//! three actions (submit, reset, reveal) onto it. The controller turns
//! engine results into status text and keeps the list of guesses shown on
//! screen; the engine itself stays history-free.

use crate::games::baseball::{GameSession, GuessValidator, ScoreResult, Triple, ValidationError};
use crate::settings::Settings;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Status shown before the first action.
pub const WELCOME_MESSAGE: &str = "Guess the three distinct digits.";

/// Status shown after a reset.
pub const RESET_MESSAGE: &str = "The game has been reset.";

/// Status shown when the guess matches the secret.
pub const SOLVED_MESSAGE: &str = "Correct!";

/// Status shown when revealing is turned off.
pub const REVEAL_DISABLED_MESSAGE: &str = "Revealing the answer is disabled.";

/// A scored guess, kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    /// The guess as submitted.
    pub guess: Triple,
    /// Its score.
    pub result: ScoreResult,
}

/// Renders a score the way the status line shows it.
pub fn render_score(result: ScoreResult) -> String {
    match result {
        ScoreResult::Solved => SOLVED_MESSAGE.to_string(),
        ScoreResult::Partial { strike, ball } => {
            format!("ball count = {}, strike count = {}", ball, strike)
        }
    }
}

/// Renders a rejected guess.
pub fn render_validation_error(error: ValidationError) -> String {
    format!("Input error: {}", error)
}

/// Renders the revealed answer.
pub fn render_answer(secret: Triple) -> String {
    format!("The answer is {}.", secret)
}

/// Game controller: session, random source and status line.
#[derive(Debug)]
pub struct Controller<R> {
    session: GameSession,
    rng: R,
    allow_reveal: bool,
    status: String,
    history: Vec<GuessRecord>,
}

impl Controller<StdRng> {
    /// Builds a controller from settings, seeding the generator if asked.
    #[instrument(skip(settings), fields(seeded = settings.seed().is_some()))]
    pub fn from_settings(settings: &Settings) -> Self {
        let rng = match settings.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng, *settings.allow_reveal())
    }
}

impl<R: Rng> Controller<R> {
    /// Creates a controller and starts the first game from `rng`.
    pub fn new(mut rng: R, allow_reveal: bool) -> Self {
        let session = GameSession::create_with(&mut rng);
        Self {
            session,
            rng,
            allow_reveal,
            status: WELCOME_MESSAGE.to_string(),
            history: Vec::new(),
        }
    }

    /// Validates and scores raw input. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for rejected input; the session and
    /// history are left untouched and the status shows the reason.
    #[instrument(skip(self))]
    pub fn submit(&mut self, raw: &str) -> Result<ScoreResult, ValidationError> {
        let guess = match GuessValidator::parse(raw.trim()) {
            Ok(guess) => guess,
            Err(e) => {
                debug!(error = %e, "Rejected guess");
                self.status = render_validation_error(e);
                return Err(e);
            }
        };

        let result = self.session.submit(guess);
        self.history.push(GuessRecord { guess, result });
        self.status = render_score(result);
        Ok(result)
    }

    /// Starts a new game and clears the guess list.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.session.reset_with(&mut self.rng);
        self.history.clear();
        self.status = RESET_MESSAGE.to_string();
    }

    /// Shows the secret, if allowed. Returns it when shown.
    #[instrument(skip(self))]
    pub fn reveal(&mut self) -> Option<Triple> {
        if !self.allow_reveal {
            self.status = REVEAL_DISABLED_MESSAGE.to_string();
            return None;
        }

        let secret = self.session.peek_secret();
        info!("Answer revealed");
        self.status = render_answer(secret);
        Some(secret)
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Guesses scored since the last reset, oldest first.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The underlying session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Whether reveal is enabled.
    pub fn allow_reveal(&self) -> bool {
        self.allow_reveal
    }
}
