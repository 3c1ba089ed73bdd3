//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use number_baseball::Controller;
use rand::Rng;
use tracing::debug;

/// Longest input the text box accepts.
const MAX_INPUT_CHARS: usize = 8;

/// Main application state.
pub struct App<R> {
    controller: Controller<R>,
    input: String,
    should_quit: bool,
}

impl<R: Rng> App<R> {
    /// Creates a new application.
    pub fn new(controller: Controller<R>) -> Self {
        Self {
            controller,
            input: String::new(),
            should_quit: false,
        }
    }

    /// Gets the controller.
    pub fn controller(&self) -> &Controller<R> {
        &self.controller
    }

    /// Gets the text typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    ///
    /// Enter submits, Ctrl-R resets, Ctrl-A reveals, Esc or Ctrl-C quits.
    /// A rejected guess stays in the box so it can be corrected.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        debug!(?key, "Handling key");

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => {
                self.controller.reset();
                self.input.clear();
            }
            KeyCode::Char('a') if ctrl => {
                self.controller.reveal();
            }
            KeyCode::Enter => {
                if self.controller.submit(&self.input).is_ok() {
                    self.input.clear();
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl && self.input.chars().count() < MAX_INPUT_CHARS => {
                self.input.push(c);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use number_baseball::{RESET_MESSAGE, ScoreResult};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn app() -> App<ChaCha8Rng> {
        App::new(Controller::new(ChaCha8Rng::seed_from_u64(1), true))
    }

    fn press(app: &mut App<ChaCha8Rng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App<ChaCha8Rng>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App<ChaCha8Rng>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_enter_submits_and_clears() {
        let mut app = app();
        let secret = app.controller().session().peek_secret().to_string();
        type_text(&mut app, &secret);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input(), "");
        assert_eq!(app.controller().history()[0].result, ScoreResult::Solved);
    }

    #[test]
    fn test_rejected_guess_stays_in_box() {
        let mut app = app();
        type_text(&mut app, "11");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input(), "11");
        assert!(app.controller().history().is_empty());
    }

    #[test]
    fn test_backspace_and_input_limit() {
        let mut app = app();
        type_text(&mut app, "1234567890");
        assert_eq!(app.input(), "12345678");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input(), "1234567");
    }

    #[test]
    fn test_ctrl_shortcuts() {
        let mut app = app();
        type_text(&mut app, "12");
        ctrl(&mut app, 'r');
        assert_eq!(app.input(), "");
        assert_eq!(app.controller().status(), RESET_MESSAGE);

        ctrl(&mut app, 'a');
        let secret = app.controller().session().peek_secret();
        assert_eq!(app.controller().status(), format!("The answer is {}.", secret));

        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }
}
