// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rounding and display of money amounts.

/// Round to cents, half away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount in en-US style: grouped thousands, currency symbol
/// for common codes and the ISO code otherwise.
///
/// ```
/// use stockvox_finance::format_currency;
/// assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
/// assert_eq!(format_currency(-12.0, "EUR"), "-€12.00");
/// assert_eq!(format_currency(1234.5, "CHF"), "CHF 1,234.50");
/// ```
pub fn format_currency(amount: f64, code: &str) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let code = code.trim().to_ascii_uppercase();
    let decimals = minor_units(&code);
    let digits = format!("{:.*}", decimals, amount.abs());
    let negative = amount < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let (whole, fraction) = match digits.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    match symbol(&code) {
        Some(sym) => out.push_str(sym),
        None => {
            out.push_str(&code);
            out.push(' ');
        }
    }
    out.push_str(&group_thousands(whole));
    if let Some(f) = fraction {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Format a percentage with two decimals, e.g. `"30.00%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

fn symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        _ => None,
    }
}

fn minor_units(code: &str) -> usize {
    match code {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
