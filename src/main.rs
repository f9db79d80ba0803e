use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use rust_reversi::cli::args::Cli;
use rust_reversi::cli::terminal::{ask_dimension, play};
use rust_reversi::core::DEFAULT_DIMENSION;
use rust_reversi::error::AppError;
use rust_reversi::GameBuilder;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    if cli.needs_dimension_prompt() {
        match ask_dimension(&mut input, &mut output, DEFAULT_DIMENSION)? {
            Some(dimension) => cli.dimension = Some(dimension),
            None => return Ok(()),
        }
    }

    let config = cli.resolve_config()?;
    tracing::info!(dimension = config.dimension, first = %config.first_player, "starting game");

    let mut session = GameBuilder::from_config(config).build();
    play(&mut session, &mut input, &mut output)?;
    Ok(())
}
