//! HTML table output.
//!
//! Produces a standalone `<table>` fragment that a page can drop into its
//! results container. Every cell is escaped since the mask column echoes
//! user input.

use super::terminal::{row_cells, HEADERS};
use crate::processing::Calculation;
use itertools::Itertools;

/// CSS class carried by the results table.
pub const TABLE_CLASS: &str = "resultado-table";

/// Render the subnets as an HTML table.
pub fn render_html(calc: &Calculation) -> String {
    log::debug!("render_html() subnets={}", calc.subnets.len());

    let header = HEADERS
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .join("");

    let mut out = String::new();
    out.push_str(&format!("<table class=\"{TABLE_CLASS}\">\n"));
    out.push_str(&format!("  <thead>\n    <tr>{header}</tr>\n  </thead>\n"));
    out.push_str("  <tbody>\n");
    for s in &calc.subnets {
        let cells = row_cells(s)
            .iter()
            .map(|c| format!("<td>{}</td>", escape_html(c)))
            .join("");
        out.push_str(&format!("    <tr>{cells}</tr>\n"));
    }
    out.push_str("  </tbody>\n</table>\n");
    out
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubnetRecord;
    use crate::processing::{calculate, CalcOptions};
    use std::net::Ipv4Addr;

    #[test]
    fn test_render_html() {
        let calc = calculate("10.0.0.0", "/24", 2, CalcOptions::default()).unwrap();
        let html = render_html(&calc);
        assert!(html.starts_with("<table class=\"resultado-table\">"));
        assert!(html.contains("<th>Subnet</th><th>Hosts</th><th>Subnet addresses</th>"));
        assert!(html.contains(
            "<tr><td>1</td><td>126</td><td>10.0.0.0 - 10.0.0.126</td><td>10.0.0.1</td><td>10.0.0.127</td><td>/24</td></tr>"
        ));
        assert_eq!(html.matches("<tr><td>").count(), 2);
        assert!(html.ends_with("</table>\n"));
    }

    #[test]
    fn test_render_html_escapes_mask() {
        let mut calc = calculate("10.0.0.0", "/24", 1, CalcOptions::default()).unwrap();
        calc.subnets[0] = SubnetRecord {
            mask: "<script>".to_string(),
            ..calc.subnets[0].clone()
        };
        assert_eq!(calc.subnets[0].network, Ipv4Addr::new(10, 0, 0, 0));
        let html = render_html(&calc);
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("\"x\" 'y'"), "&quot;x&quot; &#39;y&#39;");
        assert_eq!(escape_html("10.0.0.0"), "10.0.0.0");
    }
}
