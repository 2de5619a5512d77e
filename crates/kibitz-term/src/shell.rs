//! The interactive shell: reads commands, drives a [`Session`], prints results.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use kibitz_core::{Legality, MoveList};
use kibitz_engine::{Advice, ClickOutcome, GameStatus, Session};

use crate::command::{Command, ShellOption, parse_command};
use crate::error::TermError;

const HELP: &str = "\
commands:
  click <square> | click <row> <col>   select a piece or move the selected one
  new                                  restart from the standard layout
  position <placement> [w|b]           load a board (or 'startpos')
  board                                print the board
  moves                                list moves of the selected piece
  status                               side to move and check status
  set hints on|off                     show suggested moves
  set legality in-check|strict         when to reject moves exposing the king
  set seed <n>                         make hints reproducible
  quit                                 leave";

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermConfig {
    /// Print suggested moves after a selection.
    pub hints: bool,
    /// Self-check screening mode.
    pub legality: Legality,
    /// Seed for the hint picker; `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            hints: true,
            legality: Legality::InCheckOnly,
            seed: None,
        }
    }
}

/// Whether the read loop should keep going.
enum Flow {
    Continue,
    Quit,
}

/// The terminal front end, holding the game session and its settings.
pub struct Shell {
    session: Session,
    config: TermConfig,
}

impl Shell {
    /// Create a shell with default settings.
    pub fn new() -> Self {
        Self::with_config(TermConfig::default())
    }

    /// Create a shell with the given settings.
    pub fn with_config(config: TermConfig) -> Self {
        let mut session = match config.seed {
            Some(seed) => Session::with_seed(seed),
            None => Session::new(),
        };
        session.set_legality(config.legality);
        Self { session, config }
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run on stdin and stdout until `quit` or end of input.
    pub fn run(self) -> Result<(), TermError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the read loop over arbitrary input and output.
    pub fn run_with<R: BufRead, W: Write>(mut self, input: R, mut out: W) -> Result<(), TermError> {
        self.print_board(&mut out)?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let flow = match parse_command(trimmed) {
                Ok(cmd) => self.handle(cmd, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(out, "error: {e}")?;
                    Flow::Continue
                }
            };
            out.flush()?;

            if let Flow::Quit = flow {
                break;
            }
        }

        info!("kibitz shutting down");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, TermError> {
        match cmd {
            Command::Click { row, col } => {
                let outcome = self.session.click_coords(row, col);
                self.report(outcome, out)?;
            }
            Command::New => {
                self.session.reset();
                self.print_board(out)?;
            }
            Command::Position { position, turn } => {
                self.session.load(position, turn);
                self.print_board(out)?;
            }
            Command::Board => self.print_board(out)?,
            Command::Moves => match self.session.selection() {
                Some(selection) => {
                    let list = self.describe_moves(&selection.moves);
                    writeln!(out, "{}: {list}", selection.square)?;
                }
                None => writeln!(out, "no selection")?,
            },
            Command::Status => self.print_status(out)?,
            Command::Set(option) => self.handle_set(option, out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(name) => {
                debug!(command = %name, "ignoring unknown command");
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_set<W: Write>(&mut self, option: ShellOption, out: &mut W) -> Result<(), TermError> {
        match option {
            ShellOption::Hints(on) => {
                self.config.hints = on;
                writeln!(out, "hints {}", if on { "on" } else { "off" })?;
            }
            ShellOption::Legality(legality) => {
                self.config.legality = legality;
                self.session.set_legality(legality);
                writeln!(out, "legality {legality}")?;
            }
            ShellOption::Seed(seed) => {
                self.config.seed = Some(seed);
                self.session.reseed(seed);
                writeln!(out, "seed {seed}")?;
            }
        }
        Ok(())
    }

    fn report<W: Write>(&self, outcome: ClickOutcome, out: &mut W) -> Result<(), TermError> {
        match outcome {
            ClickOutcome::Selected {
                square,
                moves,
                advice,
            } => {
                let list = self.describe_moves(&moves);
                writeln!(out, "selected {square}: {list}")?;
                match advice {
                    Advice::Suggest(_) if !self.config.hints => {}
                    advice => writeln!(out, "{advice}")?,
                }
            }
            ClickOutcome::NoSavingMove { square } => {
                writeln!(out, "{square} cannot save the king")?;
            }
            ClickOutcome::NotYourTurn { turn } => {
                writeln!(out, "not your turn: {} to move", turn.name())?;
            }
            ClickOutcome::Deselected => writeln!(out, "deselected")?,
            ClickOutcome::Moved { mv, captured, .. } => {
                match captured {
                    Some(piece) => writeln!(out, "moved {mv}, captured {piece}")?,
                    None => writeln!(out, "moved {mv}")?,
                }
                self.print_board(out)?;
            }
            ClickOutcome::Ignored => {}
        }
        Ok(())
    }

    /// Destinations separated by spaces, captures marked with `x`.
    fn describe_moves(&self, moves: &MoveList) -> String {
        let position = self.session.position();
        let turn = self.session.turn();
        let names: Vec<String> = moves
            .iter()
            .map(|mv| {
                if position.is_enemy(mv.to(), turn) {
                    format!("x{}", mv.to())
                } else {
                    mv.to().to_string()
                }
            })
            .collect();
        names.join(" ")
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), TermError> {
        writeln!(out, "{}", self.session.position().pretty())?;
        self.print_status(out)
    }

    fn print_status<W: Write>(&self, out: &mut W) -> Result<(), TermError> {
        let turn = self.session.turn().name();
        match self.session.status() {
            GameStatus::Normal => writeln!(out, "{turn} to move")?,
            GameStatus::Check => writeln!(out, "{turn} to move, in check")?,
            GameStatus::Checkmate => writeln!(out, "DEFEAT: {turn} is checkmated")?,
        }
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(config: TermConfig, script: &str) -> String {
        let mut out = Vec::new();
        Shell::with_config(config).run_with(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn seeded() -> TermConfig {
        TermConfig {
            seed: Some(5),
            ..TermConfig::default()
        }
    }

    #[test]
    fn prints_board_on_start() {
        let output = run_script(seeded(), "");
        assert!(output.contains("8  r n b q k b n r"));
        assert!(output.contains("white to move"));
    }

    #[test]
    fn click_select_and_move() {
        let output = run_script(seeded(), "click e2\nclick e4\n");
        assert!(output.contains("selected e2: e3 e4"));
        assert!(output.contains("hint: e"));
        assert!(output.contains("moved e2-e4"));
        assert!(output.contains("black to move"));
    }

    #[test]
    fn hints_can_be_switched_off() {
        let output = run_script(seeded(), "set hints off\nclick g1\n");
        assert!(output.contains("hints off"));
        assert!(output.contains("selected g1:"));
        assert!(!output.contains("hint:"));
    }

    #[test]
    fn parse_errors_are_reported_and_loop_continues() {
        let output = run_script(seeded(), "click z9\nclick 6 4\nmoves\n");
        assert!(output.contains("error: invalid square: z9"));
        assert!(output.contains("e2: e3 e4"));
    }

    #[test]
    fn captures_are_marked() {
        let script = "position 8/8/3n4/8/3R4/8/3n4/8 w\nclick d4\nmoves\n";
        let output = run_script(seeded(), script);
        assert!(output.contains("selected d4: d3 xd2 d5 xd6 e4 f4 g4 h4 c4 b4 a4"));
        assert!(output.contains("hint: d2 (capture)"));
        assert!(output.contains("d4: d3 xd2 d5 xd6"));
    }

    #[test]
    fn wrong_side_and_deselect() {
        let output = run_script(seeded(), "click e7\nclick e2\nclick e2\nmoves\n");
        assert!(output.contains("not your turn: white to move"));
        assert!(output.contains("deselected"));
        assert!(output.contains("no selection"));
    }

    #[test]
    fn quit_stops_reading() {
        let output = run_script(seeded(), "quit\nclick e2\n");
        assert!(!output.contains("selected"));
    }

    #[test]
    fn loaded_mate_reports_defeat() {
        let output = run_script(seeded(), "position 8/8/8/8/8/2k5/1q6/K7 w\nclick a1\n");
        assert!(output.contains("DEFEAT: white is checkmated"));
        assert!(output.contains("a1 cannot save the king"));
    }

    #[test]
    fn strict_legality_setting_reaches_session() {
        let mut out = Vec::new();
        let shell = Shell::with_config(TermConfig {
            legality: Legality::Strict,
            ..seeded()
        });
        assert_eq!(shell.session().legality(), Legality::Strict);
        shell
            .run_with("position 4r3/8/8/8/8/8/4N3/4K3 w\nclick e2\n".as_bytes(), &mut out)
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("selected e2: \n"));
        assert!(output.contains("no legal move for this piece"));
    }
}
