use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Evapo reference evapotranspiration estimator.
#[derive(Parser)]
#[command(
    name = "evapo",
    version,
    about = "Reference evapotranspiration from sparse station data"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Derive the full parameter table and its estimation quality.
    Estimate(EstimateArgs),
    /// Compute reference evapotranspiration.
    Eto(EtoArgs),
}

/// Arguments for the `estimate` subcommand.
#[derive(clap::Args)]
pub struct EstimateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "evapo.toml")]
    pub config: PathBuf,

    /// Override input observation path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override parameter table output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `eto` subcommand.
#[derive(clap::Args)]
pub struct EtoArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "evapo.toml")]
    pub config: PathBuf,

    /// Override input observation path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override ET output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Which formula to evaluate.
    #[arg(short, long, value_enum, default_value_t = MethodArg::Both)]
    pub method: MethodArg,
}

/// Formula selection for the `eto` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// FAO-56 Penman-Monteith.
    Fao,
    /// Hargreaves (daily only).
    Hargreaves,
    /// Both formulas, joined on the index.
    Both,
}
