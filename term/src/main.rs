use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use sweeper_core::Game;

use config::BoardOptions;

mod app;
mod command;
mod config;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with rows, cols, mines and seed
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    board: BoardOptions,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_config = ConfigBuilder::new()
        .set_time_level(log::LevelFilter::Off)
        .build();
    TermLogger::init(
        args.verbose.log_level_filter(),
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("initializing logger")?;

    let file = match &args.config {
        Some(path) => BoardOptions::load(path)?,
        None => BoardOptions::default(),
    };
    let settings = args
        .board
        .or(file)
        .resolve()
        .context("invalid board settings")?;
    log::debug!("settings: {:?}", settings);

    let game = Game::new(settings.game, settings.seed)?;
    if let Some(seed) = game.seed() {
        log::info!("Seed {}", seed);
    }

    let stdin = io::stdin();
    let mut app = app::App::new(game, stdin.lock(), io::stdout().lock());
    app.run()
}
