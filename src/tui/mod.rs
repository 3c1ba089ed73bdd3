//! Terminal UI for number baseball

mod app;
mod ui;

use anyhow::Result;
use crossterm::event::{self, Event};
use number_baseball::Controller;
use ratatui::DefaultTerminal;
use tracing::{error, info, instrument};

use app::App;

/// Run the TUI until the player quits.
///
/// The binary points logs at a file before calling this.
#[instrument(skip_all)]
pub fn run_tui<R: rand::Rng>(controller: Controller<R>) -> Result<()> {
    info!("Starting number baseball TUI");

    let mut terminal = ratatui::init();
    let res = run_loop(&mut terminal, App::new(controller));
    ratatui::restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, then block on the next terminal event.
fn run_loop<R: rand::Rng>(terminal: &mut DefaultTerminal, mut app: App<R>) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    info!("User quit");
    Ok(())
}
