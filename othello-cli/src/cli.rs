use clap::Parser;
use othello_engine::{Board, Player};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "othello", version, about = "Play Othello in the terminal")]
pub struct Cli {
    /// Starting position: 64 squares in row-major order, X for dark, O for light, - for empty.
    #[arg(long)]
    pub board: Option<Board>,

    /// Who moves first from the starting position (dark or light).
    #[arg(long, default_value = "dark")]
    pub to_move: Player,

    /// YAML file with display settings. Falls back to OTHELLO_CONFIG_PATH.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the welcome screen.
    #[arg(long)]
    pub no_welcome: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_engine::Location;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(&["othello"]).unwrap();
        assert!(cli.board.is_none());
        assert_eq!(cli.to_move, Player::Dark);
        assert!(cli.config.is_none());
        assert!(!cli.no_welcome);
    }

    #[test]
    fn parses_board_and_player() {
        let board = "X O ".to_string() + &"- ".repeat(62);
        let args = ["othello", "--board", board.as_str(), "--to-move", "light"];
        let cli = Cli::try_parse_from(&args).unwrap();

        let parsed = cli.board.unwrap();
        assert_eq!(
            parsed.cell_at(Location::new(0, 1)),
            Ok(othello_engine::Cell::Light)
        );
        assert_eq!(cli.to_move, Player::Light);
    }

    #[test]
    fn rejects_bad_player() {
        assert!(Cli::try_parse_from(&["othello", "--to-move", "nobody"]).is_err());
    }

    #[test]
    fn rejects_short_board() {
        assert!(Cli::try_parse_from(&["othello", "--board", "XO"]).is_err());
    }
}
