use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sinchai", version, about = "Weather-based irrigation advisory CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run interactive farm profile setup
    Init,
    /// Validate config and show the farm profile
    Check,
    /// Compute an irrigation recommendation for today
    Advise(AdviseArgs),
}

#[derive(Args)]
pub struct AdviseArgs {
    /// Weather snapshot JSON file (see docs for the expected shape)
    #[arg(short, long)]
    pub weather: Option<PathBuf>,

    /// Ambient temperature in °C (manual entry, used when no --weather file)
    #[arg(long)]
    pub temp: Option<f64>,

    /// Relative humidity percent (manual entry)
    #[arg(long, default_value_t = 50.0)]
    pub humidity: f64,

    /// Wind speed in km/h (manual entry)
    #[arg(long, default_value_t = 0.0)]
    pub wind: f64,

    /// Forecast rain for today in mm (manual entry)
    #[arg(long, default_value_t = 0.0)]
    pub rain: f64,

    /// Chance of rain today, percent 0-100 (manual entry)
    #[arg(long, default_value_t = 0.0)]
    pub rain_chance: f64,

    /// Crop is in a water-sensitive growth phase (flowering/fruit-set)
    #[arg(long)]
    pub critical_stage: bool,

    /// Override the configured crop for this run
    #[arg(long)]
    pub crop: Option<String>,

    /// Override the configured soil type for this run
    #[arg(long)]
    pub soil: Option<String>,

    /// Override the configured field size in acres for this run
    #[arg(long)]
    pub acres: Option<f64>,

    /// Override the configured irrigation method for this run
    #[arg(long)]
    pub method: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
