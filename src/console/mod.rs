//! Line-oriented text driver for a [`Game`].
//!
//! Reads one command per line and answers with one or more lines:
//!
//! ```text
//! > click e2
//! selected e2: e4 e3
//! > click e4
//! moved e2 e4
//! > status
//! turn black
//! selection none
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::board::{RenderStyle, SquareSet};
use crate::game::{ClickOutcome, Game};

pub mod command;
pub mod options;

pub use command::{parse_console_command, ConsoleCommand};
pub use options::{ConsoleOptions, OptionError};

fn format_squares(squares: SquareSet) -> String {
    if squares.is_empty() {
        return "none".to_string();
    }
    squares
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One console session: a game plus its display options.
#[derive(Debug, Default)]
pub struct Console {
    game: Game,
    options: ConsoleOptions,
}

impl Console {
    #[must_use]
    pub fn new(options: ConsoleOptions) -> Self {
        Console {
            game: Game::new(),
            options,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }

    fn render(&self) -> String {
        let style = if self.options.highlight {
            RenderStyle {
                glyphs: self.options.glyphs,
                selected: self.game.selection(),
                marked: self.game.destinations().unwrap_or_default(),
            }
        } else {
            RenderStyle {
                glyphs: self.options.glyphs,
                ..RenderStyle::default()
            }
        };
        self.game.board().render(style)
    }

    fn report_outcome<W: Write>(&self, outcome: ClickOutcome, out: &mut W) -> io::Result<()> {
        match outcome {
            ClickOutcome::Ignored => writeln!(out, "ignored")?,
            ClickOutcome::Selected {
                square,
                destinations,
            } => writeln!(out, "selected {square}: {}", format_squares(destinations))?,
            ClickOutcome::Moved {
                from, to, captured, ..
            } => match captured {
                Some(victim) => writeln!(out, "moved {from} {to} x{}", victim.to_char())?,
                None => writeln!(out, "moved {from} {to}")?,
            },
            ClickOutcome::Deselected => writeln!(out, "deselected")?,
            ClickOutcome::Reset => writeln!(out, "reset")?,
        }
        let changed = !matches!(outcome, ClickOutcome::Ignored);
        if changed && self.options.autoshow {
            write!(out, "{}", self.render())?;
        }
        Ok(())
    }

    /// Execute one command. Returns `false` when the session should end.
    pub fn execute<W: Write>(&mut self, cmd: ConsoleCommand, out: &mut W) -> io::Result<bool> {
        debug!("console command {cmd:?}");
        match cmd {
            ConsoleCommand::Click(square) => match self.game.click(square) {
                Ok(outcome) => self.report_outcome(outcome, out)?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            ConsoleCommand::Reset => {
                let outcome = self.game.reset();
                self.report_outcome(outcome, out)?;
            }
            ConsoleCommand::Show => write!(out, "{}", self.render())?,
            ConsoleCommand::Moves => match self.game.destinations() {
                Some(moves) => writeln!(out, "moves {}", format_squares(moves))?,
                None => writeln!(out, "error: nothing selected")?,
            },
            ConsoleCommand::Status => {
                writeln!(out, "turn {}", self.game.side_to_move())?;
                match self.game.selection() {
                    Some(sq) => writeln!(out, "selection {sq}")?,
                    None => writeln!(out, "selection none")?,
                }
            }
            ConsoleCommand::Layout => writeln!(out, "{}", self.game.board().to_layout())?,
            ConsoleCommand::Set { name, value } => {
                match self.options.apply_set(&name, value.as_deref()) {
                    Ok(()) => {
                        for line in self.options.describe() {
                            writeln!(out, "{line}")?;
                        }
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            ConsoleCommand::Quit => return Ok(false),
            ConsoleCommand::Invalid(msg) => writeln!(out, "error: {msg}")?,
            ConsoleCommand::Unknown(line) => writeln!(out, "error: unknown command '{line}'")?,
        }
        out.flush()?;
        Ok(true)
    }
}

/// Run a session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, options: ConsoleOptions) -> io::Result<()> {
    let mut console = Console::new(options);
    info!("console session started");
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_console_command(&line) else {
            continue;
        };
        if !console.execute(cmd, &mut output)? {
            break;
        }
    }
    info!("console session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out, ConsoleOptions::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_opening_script() {
        let out = session("click e2\nclick e4\nstatus\nclick e7\nclick e5\nstatus\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "selected e2: e4 e3",
                "moved e2 e4",
                "turn black",
                "selection none",
                "selected e7: e6 e5",
                "moved e7 e5",
                "turn white",
                "selection none",
            ]
        );
    }

    #[test]
    fn test_moves_requires_selection() {
        let out = session("moves\nclick b1\nmoves\n");
        assert_eq!(out, "error: nothing selected\nselected b1: a3 c3\nmoves a3 c3\n");
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = session("quit\nclick e2\n");
        assert!(out.is_empty());
    }

    #[test]
    fn test_capture_is_reported() {
        let out = session("click e2\nclick e4\nclick d7\nclick d5\nclick e4\nclick d5\nlayout\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[5], "moved e4 d5 xp");
        assert_eq!(lines[6], "rnbqkbnr/ppp1pppp/8/3P4/8/8/PPPP1PPP/RNBQKBNR");
    }

    #[test]
    fn test_autoshow_draws_after_changes() {
        let out = session("set autoshow on\nclick e4\nclick e2\n");
        assert!(out.contains("option autoshow on"));
        assert!(out.contains("ignored\n"));
        // ignored clicks do not redraw
        assert_eq!(out.matches("a  b  c").count(), 1);
        assert!(out.contains("[P]"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let out = session("fly\nclick 9,9\nset colour red\nstatus\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "error: unknown command 'fly'");
        assert!(lines[1].starts_with("error: "));
        assert_eq!(lines[2], "error: Unknown option 'colour'");
        assert_eq!(lines[3], "turn white");
    }
}
