use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "launchboard", version, about = "Launch outcome dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard HTTP API server
    Serve(ServeArgs),
    /// Print the outcome summary and payload distribution for a selection
    Summary(SummaryArgs),
    /// List launch sites and payload bounds in the dataset
    Sites(SitesArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Launch records file (CSV or JSON)
    #[arg(short, long)]
    pub dataset: Option<String>,
}

#[derive(Args, Clone)]
pub struct SummaryArgs {
    /// Launch records file (CSV or JSON)
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Launch site, or ALL
    #[arg(short, long, default_value = "ALL")]
    pub site: String,

    /// Minimum payload mass in kg (defaults to the dataset minimum)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Maximum payload mass in kg (defaults to the dataset maximum)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct SitesArgs {
    /// Launch records file (CSV or JSON)
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
