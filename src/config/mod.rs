pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-library")]
#[command(about = "A small in-memory library catalog with borrow tracking")]
pub struct CliConfig {
    /// TOML file with seed items; the built-in seed is used when absent
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Print available items and exit")]
    pub list: bool,

    #[arg(long, requires = "list", help = "Print the listing as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
