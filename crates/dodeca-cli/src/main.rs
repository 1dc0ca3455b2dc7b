//! Dodeca CLI: the `dodeca-shape` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List { json } => commands::list::run(json),

        Commands::Parse { name, json } => commands::parse::run(name, json),

        Commands::Index { name, json } => commands::index::run(name, json),

        Commands::FromIndex { index, json } => commands::from_index::run(index, json),

        Commands::Preference {
            raw,
            default,
            json,
        } => commands::preference::run(raw, default, json),
    }
}
