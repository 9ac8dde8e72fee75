//! Formatting utilities used for CLI and export outputs.

/// Fixed currency symbol; amounts are never localised.
pub const CURRENCY_SYMBOL: &str = "£";

pub fn format_currency(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2} hrs")
}

/// Plain number: `20` stays `20`, `17.5` stays `17.5`.
pub fn format_number(n: f64) -> String {
    format!("{n}")
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// `[########------------]` with `ratio` in `[0, 1]`.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
