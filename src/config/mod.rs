pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pair-sum")]
#[command(about = "Find two numbers in a sorted list that add up to a target")]
pub struct CliConfig {
    /// Comma separated numbers in non-decreasing order, e.g. "2, 7, 11, 15"
    #[arg(short, long, allow_hyphen_values = true)]
    pub numbers: String,

    /// Target sum
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: String,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("numbers", &self.numbers)?;
        validate_non_empty_string("target", &self.target)
    }
}
