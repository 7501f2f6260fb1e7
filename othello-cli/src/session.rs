//! The interactive game loop: rendering, reading a move, and reporting the result.
//!
//! Everything goes through a generic reader and writer so a whole game can be
//! scripted in tests.

use crate::config::Config;
use log::info;
use othello_engine::{Cell, Game, Location, Player, EDGE_LENGTH};
use std::io::{self, BufRead, Write};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// One line of player input, interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Pick a move from the numbered list (1-based).
    Select(usize),
    /// Switch to typing a row and column.
    Coordinates,
    /// A square given in algebraic notation ("d3").
    At(Location),
    Quit,
    Invalid,
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.eq_ignore_ascii_case("q") {
        Command::Quit
    } else if input.eq_ignore_ascii_case("c") {
        Command::Coordinates
    } else if let Ok(choice) = input.parse::<usize>() {
        Command::Select(choice)
    } else if let Ok(location) = input.parse::<Location>() {
        Command::At(location)
    } else {
        Command::Invalid
    }
}

/// Parse "row col" (zero-indexed, whitespace separated).
pub fn parse_coordinates(input: &str) -> Option<Location> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;

    match parts.next() {
        None => Some(Location::new(row, col)),
        Some(_) => None,
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub game: Game,
    pub quit: bool,
}

pub struct Session<R, W> {
    game: Game,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, config: Config, input: R, output: W) -> Self {
        Self {
            game,
            config,
            input,
            output,
        }
    }

    /// Play until the game is over, the player quits, or input runs out.
    pub fn run(mut self) -> io::Result<Outcome> {
        let mut move_number = 0;
        let mut quit = false;

        while let Some(player) = self.game.current_player() {
            move_number += 1;
            self.clear()?;

            writeln!(self.output, "=== OTHELLO ===")?;
            writeln!(self.output, "Move #{}", move_number)?;
            writeln!(
                self.output,
                "Current player: {} ({})",
                player,
                self.symbol(player.into())
            )?;
            self.show_board()?;

            let moves: Vec<Location> = self.game.legal_moves().collect();
            writeln!(self.output, "\nAvailable moves:")?;
            for (i, mv) in moves.iter().enumerate() {
                writeln!(
                    self.output,
                    "  {}. ({},{}) {}",
                    i + 1,
                    mv.row(),
                    mv.col(),
                    mv
                )?;
            }

            write!(
                self.output,
                "\nEnter move number (1-{}), a square such as d3, 'c' for coordinates, or 'q' to quit: ",
                moves.len()
            )?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    quit = true;
                    break;
                }
            };

            let location = match parse_command(&line) {
                Command::Quit => {
                    quit = true;
                    break;
                }
                Command::Select(choice) => match choice.checked_sub(1).and_then(|i| moves.get(i)) {
                    Some(&mv) => Some(mv),
                    None => {
                        self.reject("Invalid choice.")?;
                        continue;
                    }
                },
                Command::Coordinates => {
                    write!(self.output, "Enter row and column (e.g., '2 3'): ")?;
                    self.output.flush()?;
                    match self.read_line()?.as_deref().and_then(parse_coordinates) {
                        Some(location) => Some(location),
                        None => {
                            self.reject("Invalid input format.")?;
                            continue;
                        }
                    }
                }
                Command::At(location) => Some(location),
                Command::Invalid => None,
            };

            match location {
                Some(location) if self.game.play(location) => {
                    info!("{} played {}", player, location);
                    writeln!(self.output, "Played move at {}!", location)?;
                }
                Some(location) => {
                    self.reject(&format!("{} is not a valid move.", location))?;
                }
                None => self.reject("Invalid choice.")?,
            }
        }

        self.finish(quit)?;
        Ok(Outcome {
            game: self.game,
            quit,
        })
    }

    fn finish(&mut self, quit: bool) -> io::Result<()> {
        self.clear()?;
        writeln!(self.output, "=== GAME OVER ===")?;
        self.show_board()?;

        if quit {
            writeln!(self.output, "\nGame ended by player.")?;
            return Ok(());
        }

        match self.game.winner() {
            Some(winner) => writeln!(
                self.output,
                "\nWinner: {} ({}) wins!",
                winner,
                self.symbol(winner.into())
            ),
            None => writeln!(self.output, "\nWinner: It's a draw!"),
        }
    }

    fn show_board(&mut self) -> io::Result<()> {
        let board = render_board(&self.game, &self.config);
        self.output.write_all(board.as_bytes())?;
        writeln!(self.output, "\nGame statistics:")?;
        writeln!(
            self.output,
            "  Dark ({}): {} discs",
            self.config.dark_symbol,
            self.game.disc_count(Player::Dark)
        )?;
        writeln!(
            self.output,
            "  Light ({}): {} discs",
            self.config.light_symbol,
            self.game.disc_count(Player::Light)
        )?;
        writeln!(self.output, "  Empty squares: {}", self.game.empty_count())
    }

    fn reject(&mut self, message: &str) -> io::Result<()> {
        if self.config.clear_screen {
            writeln!(self.output, "{} Press Enter to try again...", message)?;
            self.output.flush()?;
            self.read_line()?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.config.clear_screen {
            self.output.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        Ok(())
    }

    fn symbol(&self, cell: Cell) -> char {
        cell_symbol(cell, &self.config)
    }

    /// Read one line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

fn cell_symbol(cell: Cell, config: &Config) -> char {
    match cell {
        Cell::Dark => config.dark_symbol,
        Cell::Light => config.light_symbol,
        Cell::Empty => config.empty_symbol,
    }
}

/// Draw the board in a box, with zero-indexed row and column labels.
pub fn render_board(game: &Game, config: &Config) -> String {
    let edge = EDGE_LENGTH as i8;
    let mut out = String::from("\n    ");

    for col in 0..edge {
        out.push_str(&format!("{}   ", col));
    }
    out.push_str("\n  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

    for row in 0..edge {
        out.push_str(&format!("{} │", row));
        for col in 0..edge {
            let cell = game
                .cell_at(Location::new(row, col))
                .unwrap_or(Cell::Empty);
            out.push_str(&format!(" {} │", cell_symbol(cell, config)));
        }

        if row < edge - 1 {
            out.push_str("\n  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
        } else {
            out.push_str("\n  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet() -> Config {
        Config {
            clear_screen: false,
            ..Config::default()
        }
    }

    fn run_script(game: Game, script: &str) -> (Outcome, String) {
        let mut output = Vec::new();
        let outcome = Session::new(game, quiet(), Cursor::new(script), &mut output)
            .run()
            .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("q\n"), Command::Quit);
        assert_eq!(parse_command(" C "), Command::Coordinates);
        assert_eq!(parse_command("3"), Command::Select(3));
        assert_eq!(parse_command("d3"), Command::At(Location::new(2, 3)));
        assert_eq!(parse_command("hello"), Command::Invalid);
        assert_eq!(parse_command(""), Command::Invalid);
    }

    #[test]
    fn parse_coordinate_pairs() {
        assert_eq!(parse_coordinates("2 3\n"), Some(Location::new(2, 3)));
        assert_eq!(parse_coordinates("-1 9"), Some(Location::new(-1, 9)));
        assert_eq!(parse_coordinates("2"), None);
        assert_eq!(parse_coordinates("2 3 4"), None);
        assert_eq!(parse_coordinates("a b"), None);
    }

    #[test]
    fn render_start_board() {
        let rendered = render_board(&Game::new(), &Config::default());
        assert!(rendered.contains("3 │   │   │   │ W │ B │   │   │   │"));
        assert!(rendered.contains("4 │   │   │   │ B │ W │   │   │   │"));
        assert!(rendered.ends_with("└───┴───┴───┴───┴───┴───┴───┴───┘\n"));
    }

    #[test]
    fn select_by_number_then_quit() {
        let (outcome, output) = run_script(Game::new(), "1\nq\n");

        assert!(outcome.quit);
        assert_eq!(outcome.game.cell_at(Location::new(2, 3)), Ok(Cell::Dark));
        assert!(output.contains("Played move at D3!"));
        assert!(output.contains("Game ended by player."));
    }

    #[test]
    fn coordinates_and_rejections() {
        let (outcome, output) = run_script(Game::new(), "c\n0 0\n9\nc\nxyz\nc\n5 4\nq\n");

        assert!(output.contains("A1 is not a valid move."));
        assert!(output.contains("Invalid choice."));
        assert!(output.contains("Invalid input format."));
        assert_eq!(outcome.game.cell_at(Location::new(5, 4)), Ok(Cell::Dark));
        assert_eq!(outcome.game.active_player(), Player::Light);
    }

    #[test]
    fn end_of_input_stops() {
        let (outcome, _) = run_script(Game::new(), "");
        assert!(outcome.quit);
        assert_eq!(outcome.game, Game::new());
    }

    #[test]
    fn plays_to_a_winner() {
        let board = "X O - - - - - -".to_string() + &" - - - - - - - -".repeat(7);
        let game = Game::from_board(board.parse().unwrap(), Player::Dark);

        let (outcome, output) = run_script(game, "a3\nc1\n");

        assert!(!outcome.quit);
        assert!(outcome.game.is_finished());
        assert!(output.contains("A3 is not a valid move."));
        assert!(output.contains("Winner: Dark (B) wins!"));
    }
}
