//! Command-line arguments.

use crate::config::Config;
use crate::output::OutputFormat;
use crate::processing::CalcOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "subnet-calculator")]
#[command(about = "Split an IPv4 network into equal subnets within its last octet.")]
pub struct CommandLine {
    /// Base address, e.g. 192.168.1.10 (the last octet is ignored)
    pub address: String,
    /// Mask as /N or a.b.c.d
    pub mask: String,
    /// Number of subnets to create
    #[arg(allow_hyphen_values = true)]
    pub count: String,
    /// Report format [env: SUBNET_CALC_FORMAT]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Reject dotted masks that are not contiguous ones [env: SUBNET_CALC_STRICT_MASK]
    #[arg(long)]
    pub strict_mask: bool,
    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Flags win over the environment.
    pub fn format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.format)
    }

    pub fn options(&self, config: &Config) -> CalcOptions {
        CalcOptions {
            strict_mask: self.strict_mask || config.strict_mask,
        }
    }
}
