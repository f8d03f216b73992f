//! Report banner shown above the terminal table.

use crate::processing::Calculation;
use chrono::DateTime;
use chrono_tz::Tz;
use colored::Colorize;

/// Current time in the configured timezone.
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    chrono::Utc::now().with_timezone(&tz)
}

/// One-line summary of the calculation, stamped with `at`.
pub fn write_banner(calc: &Calculation, at: DateTime<Tz>) -> String {
    let prefix = match calc.mask.prefix_len() {
        Some(len) => format!("/{len}"),
        None => "non-contiguous".to_string(),
    };
    format!(
        "# {at} {network} [{binary}] mask {dotted} ({prefix}) {count} subnets, {bits} bits borrowed, stride {stride}",
        at = at.format("%Y-%m-%d %H:%M:%S %Z"),
        network = calc.network.to_string().on_blue(),
        binary = calc.network_binary,
        dotted = calc.mask.dotted(),
        count = calc.plan.count,
        bits = calc.plan.bits,
        stride = calc.plan.stride,
    )
}
