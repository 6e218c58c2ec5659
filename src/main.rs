mod cli;
mod config;
mod convert;
mod estimate_cmd;
mod eto_cmd;
mod logging;
mod pipeline;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Estimate(args) => estimate_cmd::run(args),
        Command::Eto(args) => eto_cmd::run(args),
    }
}
