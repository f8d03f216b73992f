//! Terminal output with colors.

use crate::models::SubnetRecord;
use crate::processing::Calculation;
use colored::Colorize;

/// Column titles shared by every table renderer.
pub const HEADERS: [&str; 6] = [
    "Subnet",
    "Hosts",
    "Subnet addresses",
    "First address",
    "Broadcast",
    "Mask",
];

/// Format a value as a quoted, right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// The six table cells of one subnet, in [`HEADERS`] order.
pub fn row_cells(s: &SubnetRecord) -> [String; 6] {
    [
        s.index.to_string(),
        s.host_count.to_string(),
        s.address_range(),
        s.first_host.to_string(),
        s.broadcast.to_string(),
        s.mask.clone(),
    ]
}

fn column_widths(calc: &Calculation) -> [usize; 6] {
    let mut widths = HEADERS.map(str::len);
    for s in &calc.subnets {
        for (w, cell) in widths.iter_mut().zip(row_cells(s).iter()) {
            *w = (*w).max(cell.len());
        }
    }
    widths
}

/// Render an aligned table, header in bold.
pub fn render_table(calc: &Calculation) -> String {
    let widths = column_widths(calc);
    let line = |cells: &[String; 6]| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<String>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header = line(&HEADERS.map(String::from));
    let mut out = format!("{}\n", header.bold());
    for s in &calc.subnets {
        out.push_str(&line(&row_cells(s)));
        out.push('\n');
    }
    out
}
