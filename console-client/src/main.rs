mod board_view;
mod config;
mod console_session;
mod session_rng;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::config::{ConfigManager, Validate};
use tictactoe_engine::{log, logger};

use config::{Config, FirstPlayerMode, get_config_manager};
use console_session::{ConsoleSession, SessionOptions};
use session_rng::SessionRng;

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Tic-tac-toe against a computer that never loses")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerMode>,

    /// Print the computer's evaluation of every cell before it moves
    #[arg(long)]
    show_scores: bool,

    /// Seed for the random first-player draw
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = match args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };

    let mut config: Config = config_manager.get_config()?;
    config.game.apply_overrides(args.first_player, args.seed);
    if args.show_scores {
        config.game.show_move_scores = true;
    }
    config.validate()?;
    if config.game.rng_seed.is_some() && config.game.effective_seed().is_none() {
        log!(
            "Ignoring rng seed: first player is {:?}",
            config.game.first_player
        );
    }

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let rng = match config.game.effective_seed() {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting session: first player {:?}, rng seed {}",
        config.game.first_player,
        rng.seed()
    );

    let options = SessionOptions {
        first_player: config.game.first_player,
        show_move_scores: config.game.show_move_scores,
    };
    let session = ConsoleSession::new(io::stdin().lock(), io::stdout().lock(), options, rng);
    let summary = session.run()?;

    log!(
        "Session finished after {} games",
        summary.games_finished()
    );

    Ok(())
}
