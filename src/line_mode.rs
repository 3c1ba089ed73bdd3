//! Line-oriented front end: one guess or command per line.

use crate::controller::Controller;
use rand::Rng;
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Commands accepted in line mode. Anything else is treated as a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::EnumIter)]
pub enum LineCommand {
    /// Start a new game.
    #[strum(serialize = ":reset")]
    Reset,
    /// Show the answer.
    #[strum(serialize = ":reveal")]
    Reveal,
    /// List commands.
    #[strum(serialize = ":help")]
    Help,
    /// Leave.
    #[strum(to_string = ":quit", serialize = ":q")]
    Quit,
}

impl LineCommand {
    /// Short description for the help line.
    pub fn description(self) -> &'static str {
        match self {
            LineCommand::Reset => "new game",
            LineCommand::Reveal => "show the answer",
            LineCommand::Help => "this help",
            LineCommand::Quit => "leave",
        }
    }
}

/// One-line summary of the commands.
pub fn help_line() -> String {
    let commands = LineCommand::iter()
        .map(|c| format!("{} ({})", c, c.description()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Type three digits to guess. Commands: {}", commands)
}

/// Plays until `:quit` or end of input, echoing the status after each line.
#[instrument(skip_all)]
pub fn run<R, I, O>(controller: &mut Controller<R>, input: I, mut output: O) -> io::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    info!("Starting line mode");
    writeln!(output, "{}", controller.status())?;
    writeln!(output, "{}", help_line())?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with(':') {
            match trimmed.parse::<LineCommand>() {
                Ok(LineCommand::Quit) => {
                    debug!("Quit requested");
                    break;
                }
                Ok(LineCommand::Reset) => controller.reset(),
                Ok(LineCommand::Reveal) => {
                    controller.reveal();
                }
                Ok(LineCommand::Help) => {
                    writeln!(output, "{}", help_line())?;
                    continue;
                }
                Err(_) => {
                    writeln!(output, "Unknown command: {}", trimmed)?;
                    continue;
                }
            }
        } else {
            // Rejections are reported through the status line.
            controller.submit(trimmed).ok();
        }

        writeln!(output, "{}", controller.status())?;
    }

    output.flush()
}
