//! Command-line interface for timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "timetravel.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Fold a click script and print the resulting game
    Replay {
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Clicks: `N` or a cell label clicks that square, `mN` or `#N` jumps to move N
        #[arg(allow_hyphen_values = true)]
        clicks: Vec<String>,
    },
}
