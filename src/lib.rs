//! IPv4 subnet calculator.
//!
//! Splits the last octet of a base address into N equal subnets and reports
//! each subnet's network, usable host range, broadcast and host count.
//!
//! ```
//! use subnet_calculator::{calculate, CalcOptions};
//! let calc = calculate("10.0.0.0", "/24", 5, CalcOptions::default()).unwrap();
//! assert_eq!(calc.subnets[4].network.to_string(), "10.0.0.128");
//! ```

pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use models::{parse_mask, ParsedMask, SubnetRecord};
pub use processing::{
    bits_needed, calculate, enumerate, enumerate_with, normalize, parse_subnet_count,
    CalcOptions, Calculation,
};

use cmd::CommandLine;
use config::Config;
use std::error::Error;

/// Run one calculation for the parsed command line and return the report.
pub fn run(cmd: &CommandLine, config: &Config) -> Result<String, Box<dyn Error>> {
    let count = parse_subnet_count(&cmd.count)?;
    let calc = calculate(&cmd.address, &cmd.mask, count, cmd.options(config))?;
    output::render(&calc, cmd.format(config), output::now_in(config.timezone))
}
