//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "snake")]
#[command(about = "Snake player profiles and session history")]
pub struct Args {
    /// Directory holding one profile file per player
    #[arg(long, env = "SNAKE_PROFILE_DIR", default_value = "Players", global = true)]
    pub data_dir: PathBuf,

    /// Profile file extension
    #[arg(long, env = "SNAKE_PROFILE_EXT", default_value = "json", global = true)]
    pub extension: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new profile with default settings
    New {
        name: String,
        #[command(flatten)]
        board: BoardOptions,
        /// Replace an existing profile of the same name
        #[arg(long)]
        force: bool,
    },
    /// Print a profile and its session history
    Show { name: String },
    /// Change a profile's board, tick interval or color setting
    Configure {
        name: String,
        #[command(flatten)]
        board: BoardOptions,
    },
    /// Delete a stored profile
    Delete { name: String },
    /// List stored profiles
    List,
    /// Record the outcome of a finished game
    Record(RecordArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct BoardOptions {
    /// Board rows
    #[arg(long)]
    pub rows: Option<u32>,
    /// Board columns
    #[arg(long)]
    pub cols: Option<u32>,
    /// Milliseconds between board updates
    #[arg(long)]
    pub tick: Option<u32>,
    /// Whether the console supports colored output
    #[arg(long)]
    pub color: Option<bool>,
}

#[derive(ClapArgs, Debug)]
pub struct RecordArgs {
    pub name: String,
    /// Final score
    #[arg(long)]
    pub score: f64,
    /// Final snake length
    #[arg(long)]
    pub length: u32,
    /// Speed the game was played at (defaults to the profile tick interval)
    #[arg(long)]
    pub speed: Option<u32>,
    /// Board rows at the end of the game (defaults to the profile setting)
    #[arg(long)]
    pub rows: Option<u32>,
    /// Board columns at the end of the game (defaults to the profile setting)
    #[arg(long)]
    pub cols: Option<u32>,
    /// The game was won
    #[arg(long)]
    pub won: bool,
    /// Game mode tag (MODO_NORMAL or MODO_ATRAVESAR_PAREDES)
    #[arg(long, default_value = "MODO_NORMAL")]
    pub mode: String,
}
