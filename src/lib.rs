pub mod cli;
pub mod error;
pub mod handlers;
pub mod operands;
pub mod scan;
pub mod token;
pub mod watchdog;

pub use cli::Cli;
pub use error::{Result, SumError};
pub use handlers::{RunOutcome, run_sum, run_sum_with};
pub use operands::{OperandKey, Operands};
pub use token::{ParsedToken, parse_token};
