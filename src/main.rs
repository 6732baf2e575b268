//! timetravel - tic-tac-toe with move history and time travel.

use anyhow::{Context, Result};
use clap::Parser;
use timetravel_tictactoe::cli::{Cli, Command};
use timetravel_tictactoe::{Settings, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;

    match cli.command {
        Command::Play => {
            logging::init_file(settings.log_file(), settings.log_filter())?;
            tui::run(&settings)
        }
        Command::Replay { json, clicks } => {
            logging::init_stderr(settings.log_filter());
            info!(clicks = clicks.len(), "Replaying clicks");
            let state = replay::run_script(&clicks);
            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                println!("{}", replay::render_text(&state));
            }
            Ok(())
        }
    }
}
