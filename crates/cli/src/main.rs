mod cli;
mod error;
mod fetch;
mod render;

use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::cli::Commands;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => render::render(args),
        Commands::Fetch(args) => fetch::fetch(args),
    };

    if let Err(error) = result {
        eprintln!("{error}");
        process::exit(1);
    }
}
