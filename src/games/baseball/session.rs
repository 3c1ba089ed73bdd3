//! A single number baseball game.

use super::error::ConfigurationError;
use super::rules::{ScoreResult, score};
use super::secret::generate_secret;
use super::types::Triple;
use rand::Rng;
use tracing::{debug, info, instrument};

/// One game: a secret and nothing else.
///
/// The session never freezes. After a [`ScoreResult::Solved`] it keeps
/// scoring against the same secret until [`GameSession::reset`] is called.
/// It keeps no history and no attempt counter; `submit` takes `&self`.
///
/// Mutation goes through `&mut self`, so a host that shares a session
/// across threads has to wrap it (e.g. in a `Mutex`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret: Triple,
}

impl GameSession {
    /// Starts a game with a secret drawn from the thread-local generator.
    #[instrument]
    pub fn create() -> Self {
        Self::create_with(&mut rand::rng())
    }

    /// Starts a game with a secret drawn from `rng`.
    #[instrument(skip(rng))]
    pub fn create_with<R: Rng>(rng: &mut R) -> Self {
        let session = Self {
            secret: generate_secret(rng),
        };
        info!("Game session created");
        session
    }

    /// Starts a game with an explicit secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `values` is not exactly three
    /// distinct digits in `0..10`.
    #[track_caller]
    #[instrument]
    pub fn with_secret(values: &[u8]) -> Result<Self, ConfigurationError> {
        let secret = Triple::from_values(values)?;
        info!("Game session created with explicit secret");
        Ok(Self { secret })
    }

    /// Scores a guess against the current secret.
    #[instrument(skip(self, guess), fields(guess = %guess))]
    pub fn submit(&self, guess: Triple) -> ScoreResult {
        let result = score(&self.secret, &guess);
        if result.is_solved() {
            info!("Guess matched the secret");
        } else {
            debug!(strike = result.strike(), ball = result.ball(), "Guess scored");
        }
        result
    }

    /// Replaces the secret using the thread-local generator.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.reset_with(&mut rand::rng());
    }

    /// Replaces the secret using `rng`.
    #[instrument(skip(self, rng))]
    pub fn reset_with<R: Rng>(&mut self, rng: &mut R) {
        self.secret = generate_secret(rng);
        info!("Game session reset");
    }

    /// Returns a copy of the current secret.
    pub fn peek_secret(&self) -> Triple {
        self.secret
    }
}
