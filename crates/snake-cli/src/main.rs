mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use snake_core::{ProfileStore, StoreConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("snake_core=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = StoreConfig::builder()
        .base_dir(&args.data_dir)
        .extension(args.extension.as_str())
        .build();
    let store = ProfileStore::new(config);

    match args.command {
        Command::New {
            name,
            board,
            force,
        } => commands::profile::create(&store, &name, &board, force),
        Command::Show { name } => commands::profile::show(&store, &name),
        Command::Configure { name, board } => commands::profile::configure(&store, &name, &board),
        Command::Delete { name } => commands::profile::delete(&store, &name),
        Command::List => commands::list::run(&store),
        Command::Record(outcome) => commands::record::run(&store, &outcome),
    }
}
