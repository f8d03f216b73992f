//! CSV output formatting for subnet data.

use super::terminal::{format_field, row_cells, HEADERS};
use crate::models::SubnetRecord;
use crate::processing::Calculation;

/// Field widths, one per column.
const WIDTHS: [usize; 6] = [6, 7, 35, 17, 17, 17];

/// Render the subnets as CSV with a header row.
pub fn render_csv(calc: &Calculation) -> String {
    log::info!("#Start render_csv() subnets={}", calc.subnets.len());

    let mut out = String::new();
    out.push_str(&csv_line(&HEADERS.map(String::from)));
    for s in &calc.subnets {
        out.push_str(&csv_row(s));
    }
    out
}

fn csv_row(s: &SubnetRecord) -> String {
    csv_line(&row_cells(s))
}

fn csv_line(cells: &[String; 6]) -> String {
    let fields: Vec<String> = cells
        .iter()
        .zip(WIDTHS.iter())
        .map(|(cell, width)| format_field(escape_csv_field(cell), *width))
        .collect();
    format!("{}\n", fields.join(","))
}

/// Double any embedded quotes, the field itself is always quoted.
fn escape_csv_field(input: &str) -> String {
    input.replace('"', "\"\"")
}
