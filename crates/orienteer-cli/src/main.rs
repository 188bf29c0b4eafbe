//! `orienteer` — command-line front end.
//!
//! Run: cargo run --bin orienteer -- maze input.txt

mod cli;
mod logger;
mod report;
mod settings;

use std::fs;
use std::path::Path;

use clap::Parser;

use cli::{Cli, Command};
use settings::Settings;

fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()).into())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let out = match &cli.command {
        Command::Maze(args) => {
            settings.apply_maze(args);
            log::debug!("maze costs: {:?}", settings.costs);
            report::maze(&read_input(&args.file)?, settings.costs, args.render)?
        }
        Command::Barrier(args) => {
            settings.apply_barrier(args);
            log::debug!("barrier config: {:?}", settings.barrier);
            let height = args.height.unwrap_or(args.size);
            report::barrier(
                &read_input(&args.file)?,
                args.size,
                height,
                args.take,
                &settings.barrier,
            )?
        }
    };
    print!("{out}");
    Ok(())
}
