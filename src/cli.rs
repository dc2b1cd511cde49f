use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tsalign: align one time series onto another's timestamps.
#[derive(Parser)]
#[command(
    name = "tsalign",
    version,
    about = "Resample a reference time series onto a driving series' timestamps"
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
    /// Align a reference series onto a driving series and write CSV.
    Align(AlignArgs),
}

/// Arguments for the `align` subcommand.
#[derive(clap::Args)]
pub struct AlignArgs {
    /// CSV file whose timestamps define the output grid.
    #[arg(short, long)]
    pub driving: PathBuf,

    /// CSV file resampled onto the driving timestamps.
    #[arg(short, long)]
    pub reference: PathBuf,

    /// Path to TOML configuration file. Missing default file is not an error.
    #[arg(short, long, default_value = "tsalign.toml")]
    pub config: PathBuf,

    /// Output CSV path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Out-of-range policy: ignore, zerohold or extrapolate.
    #[arg(long)]
    pub edge: Option<String>,

    /// Interpolation mode: linear or zerohold.
    #[arg(long)]
    pub interpolation: Option<String>,

    /// Divisor applied to exported time and residual columns.
    #[arg(long = "time-divisor")]
    pub time_divisor: Option<f64>,

    /// Value column to read from the driving file.
    #[arg(long = "driving-column")]
    pub driving_column: Option<String>,

    /// Value column to read from the reference file.
    #[arg(long = "reference-column")]
    pub reference_column: Option<String>,
}
