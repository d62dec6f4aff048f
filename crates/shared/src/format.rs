//! Display formatting for list rows, shared by the desktop UI and the CLI.

use std::fmt::Write as _;

use chrono::NaiveDate;

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Renders a salary the way a French locale does: space-grouped thousands,
/// decimal comma, and no fractional part for whole amounts.
pub fn format_salary(amount: f64, currency: &str) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let scaled = (amount.abs() * 100.0).round();
    // Amounts past u64 cents keep every integer digit and drop the fraction.
    let (whole, fraction) = if scaled < u64::MAX as f64 {
        let cents = scaled as u64;
        ((cents / 100).to_string(), cents % 100)
    } else {
        (format!("{:.0}", amount.abs().trunc()), 0)
    };

    let mut out = String::new();
    if amount < 0.0 && scaled != 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(&whole));
    if fraction != 0 {
        let _ = write!(out, ",{fraction:02}");
    }
    if !currency.is_empty() {
        out.push(' ');
        out.push_str(currency);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Formats with a strftime pattern; a pattern chrono cannot render falls back to ISO.
pub fn format_hire_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(pattern)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

pub fn is_renderable_date_format(pattern: &str) -> bool {
    let probe = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
    let mut out = String::new();
    write!(out, "{}", probe.format(pattern)).is_ok()
}
