pub mod explain;
pub mod finder;
pub mod input;

pub use crate::domain::model::{Operand, PairPositions, SearchStats, Solution};
pub use crate::utils::error::Result;
