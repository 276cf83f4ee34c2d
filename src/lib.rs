pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::toml_config::{ProblemReport, ProblemSet, Verdict};
pub use core::explain::{explain, explain_error, format_positions};
pub use core::finder::{find_pair, find_pair_with_stats, find_solution};
pub use core::input::{parse_sequence, parse_target};
pub use domain::model::{Operand, PairPositions, SearchStats, Solution};
pub use utils::error::{ErrorCategory, InputViolation, PairSumError, Result};
