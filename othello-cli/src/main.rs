mod cli;
mod config;
mod session;

use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use othello_engine::Game;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::session::Session;

fn main() {
    let env = Env::default().filter_or("OTHELLO_LOG_LEVEL", "warn");
    env_logger::Builder::from_env(env).init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = cli::Cli::parse();

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("OTHELLO_CONFIG_PATH").map(PathBuf::from));
    let config = Config::load(config_path.as_deref())?;
    debug!("using {:?}", config);

    let game = match cli.board {
        Some(board) => Game::from_board(board, cli.to_move),
        None => Game::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    if !cli.no_welcome {
        welcome(&mut input, &mut output)?;
    }

    let outcome = Session::new(game, config, &mut input, &mut output).run()?;
    info!(
        "finished with score {} (quit: {})",
        outcome.game.score(),
        outcome.quit
    );

    writeln!(output, "\nThanks for playing!")?;
    Ok(())
}

fn welcome<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, "\n==================================")?;
    writeln!(output, "         OTHELLO GAME             ")?;
    writeln!(output, "==================================\n")?;
    writeln!(output, "Welcome to Othello!")?;
    writeln!(output, "Dark always goes first.")?;
    writeln!(output, "Press Enter to start the game...")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
