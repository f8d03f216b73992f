//! Output formatting for subnet data.
//!
//! This module handles rendering a [`Calculation`]:
//! - [`terminal`] - aligned table with colors
//! - [`csv`] - quoted CSV
//! - [`html`] - HTML `<table>` fragment
//! - [`banner`] - timestamped summary line
//!
//! JSON output is the serialized [`Calculation`] itself.

mod banner;
mod csv;
mod html;
mod terminal;

pub use banner::{now_in, write_banner};
pub use csv::render_csv;
pub use html::{escape_html, render_html, TABLE_CLASS};
pub use terminal::{format_field, render_table, row_cells, HEADERS};

use crate::processing::Calculation;
use chrono::DateTime;
use chrono_tz::Tz;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Csv,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "table" => Ok(OutputFormat::Terminal),
            "csv" => Ok(OutputFormat::Csv),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{other}', expected terminal, csv, html or json"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Csv => "csv",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        write!(f, "{name}")
    }
}

/// Render `calc` in the requested format.
///
/// `at` is only used by the terminal banner.
pub fn render(
    calc: &Calculation,
    format: OutputFormat,
    at: DateTime<Tz>,
) -> Result<String, Box<dyn Error>> {
    log::debug!("render() format={format}");
    let out = match format {
        OutputFormat::Terminal => format!("{}\n{}", write_banner(calc, at), render_table(calc)),
        OutputFormat::Csv => render_csv(calc),
        OutputFormat::Html => render_html(calc),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(calc)
                .map_err(|e| format!("Error serializing JSON: {e}"))?;
            json.push('\n');
            json
        }
    };
    Ok(out)
}
