//! Tests for the presentation adapter and line mode.

use number_baseball::{
    Controller, RESET_MESSAGE, REVEAL_DISABLED_MESSAGE, SOLVED_MESSAGE, ScoreResult, Settings,
    ValidationError, WELCOME_MESSAGE, line_mode,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// In-memory log sink shared with the subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn controller(allow_reveal: bool) -> Controller<ChaCha8Rng> {
    Controller::new(ChaCha8Rng::seed_from_u64(42), allow_reveal)
}

fn play(controller: &mut Controller<ChaCha8Rng>, input: &str) -> Vec<String> {
    let mut output = Vec::new();
    line_mode::run(controller, input.as_bytes(), &mut output).expect("line mode failed");
    String::from_utf8(output)
        .expect("utf-8 output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_starts_with_welcome() {
    assert_eq!(controller(true).status(), WELCOME_MESSAGE);
}

#[test]
fn test_submit_records_history() {
    let mut c = controller(true);
    let secret = c.session().peek_secret();
    let wrong = if secret.values()[0] == 0 { "123" } else { "012" };

    c.submit(wrong).unwrap();
    assert_eq!(c.submit(&secret.to_string()), Ok(ScoreResult::Solved));

    assert_eq!(c.history().len(), 2);
    assert_eq!(c.history()[1].guess, secret);
    assert_eq!(c.status(), SOLVED_MESSAGE);
}

#[test]
fn test_rejected_guess_sets_warning() {
    let mut c = controller(true);
    assert_eq!(c.submit("1a3"), Err(ValidationError::NonDigitCharacter));
    assert_eq!(c.status(), "Input error: All inputs must be digits (0-9).");
    assert!(c.history().is_empty());
}

#[test]
fn test_reset_clears_history() {
    let mut c = controller(true);
    c.submit("123").unwrap();
    c.reset();
    assert!(c.history().is_empty());
    assert_eq!(c.status(), RESET_MESSAGE);
}

#[test]
fn test_reveal_shows_secret() {
    let mut c = controller(true);
    let secret = c.session().peek_secret();
    assert_eq!(c.reveal(), Some(secret));
    assert_eq!(c.status(), format!("The answer is {}.", secret));
}

#[test]
fn test_reveal_can_be_disabled() {
    let mut c = controller(false);
    assert_eq!(c.reveal(), None);
    assert_eq!(c.status(), REVEAL_DISABLED_MESSAGE);
}

#[test]
fn test_same_seed_same_games() {
    let settings = Settings::default().with_seed(Some(77));
    let mut a = Controller::from_settings(&settings);
    let mut b = Controller::from_settings(&settings);
    assert_eq!(a.session().peek_secret(), b.session().peek_secret());
    a.reset();
    b.reset();
    assert_eq!(a.session().peek_secret(), b.session().peek_secret());
}

#[test]
fn test_line_mode_session() {
    let mut c = controller(true);
    let secret = c.session().peek_secret().to_string();
    let input = format!("11\n\n:reveal\n{secret}\n:bogus\n:quit\n999\n");

    let lines = play(&mut c, &input);
    assert_eq!(lines[0], WELCOME_MESSAGE);
    assert!(lines[1].starts_with("Type three digits"));
    assert_eq!(
        &lines[2..],
        [
            "Input error: The input must consist of exactly three digits.".to_string(),
            format!("The answer is {secret}."),
            SOLVED_MESSAGE.to_string(),
            "Unknown command: :bogus".to_string(),
        ]
    );
}

#[test]
fn test_line_mode_reset_and_eof() {
    let mut c = controller(true);
    let lines = play(&mut c, ":reset\n:help\n");
    assert_eq!(lines[2], RESET_MESSAGE);
    assert!(lines[3].contains(":reveal"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_rejected_guess_is_silent_at_warn() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut c = controller(true);
        assert_eq!(c.submit("11"), Err(ValidationError::InvalidLength));
        assert_eq!(c.submit("1a2"), Err(ValidationError::NonDigitCharacter));
        assert_eq!(c.submit("113"), Err(ValidationError::DuplicateDigit));
        let secret = c.session().peek_secret();
        assert_eq!(c.submit(&secret.to_string()), Ok(ScoreResult::Solved));
        c.reset();
        c.reveal();
    });

    assert_eq!(logs.contents(), "");
}
