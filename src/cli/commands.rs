use std::path::Path;
use clap::{Parser, Subcommand, Args};
use crate::config::ConfigOverrides;

#[derive(Parser)]
#[command(name = "mobb-fp", version, about = "Export tagged false-positive issues from Mobb fix reports to CSV")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings and errors to the console
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract tagged issues from recent fix reports into a CSV file
    Run(RunArgs),
    /// Validate configuration and test connectivity to the Mobb API
    Check(ConfigArgs),
    /// Validate a configuration file without contacting the API
    Validate(ConfigArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// JSON or YAML configuration file (defaults to ./config.json when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Tenant name; selects https://<tenant>.mobb.ai
    #[arg(long)]
    pub tenant: Option<String>,

    /// Lookback window in days
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

impl ConfigArgs {
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref().map(Path::new)
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            tenant: self.tenant.clone(),
            days_of_data: self.days,
            base_url: self.base_url.clone(),
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Directory for the CSV export and the run log
    #[arg(short, long, default_value = ".")]
    pub output: String,
}
