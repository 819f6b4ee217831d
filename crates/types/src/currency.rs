//! Currency parsing and formatting for order totals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency known by its ISO code. Unrecognized codes format with the code
/// itself as a prefix.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency {
    code: String,
}

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    fn symbol(&self) -> Option<&'static str> {
        match self.code.as_str() {
            "USD" | "AUD" | "CAD" | "NZD" | "SGD" | "HKD" | "MXN" => Some("$"),
            "EUR" => Some("\u{20ac}"),
            "GBP" => Some("\u{a3}"),
            "JPY" => Some("\u{a5}"),
            "CHF" => Some("CHF "),
            "BRL" => Some("R$"),
            "ZAR" => Some("R"),
            _ => None,
        }
    }

    fn decimals(&self) -> usize {
        if self.code == "JPY" { 0 } else { 2 }
    }

    /// Formats an amount with symbol and thousands separators: `$1,234.56`.
    pub fn format(&self, amount: f64) -> String {
        let decimals = self.decimals();
        let negative = amount < 0.0;
        let fixed = format!("{:.*}", decimals, amount.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::new();
        for (idx, ch) in int_part.chars().enumerate() {
            if idx > 0 && (int_part.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        match self.symbol() {
            Some(sym) => out.push_str(sym),
            None => {
                out.push_str(&self.code);
                out.push(' ');
            }
        }
        out.push_str(&grouped);
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }

    /// Parses a user- or system-formatted monetary string into a number.
    ///
    /// Strips symbols and thousands separators; returns 0.0 for strings with
    /// no numeric content.
    pub fn parse(&self, raw: &str) -> f64 {
        let mut cleaned = String::with_capacity(raw.len());
        for ch in raw.chars() {
            if ch.is_ascii_digit() || ch == '.' || ch == '-' {
                cleaned.push(ch);
            }
        }
        cleaned.parse().unwrap_or(0.0)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping() {
        let usd = Currency::new("USD");
        assert_eq!(usd.format(1234.5), "$1,234.50");
        assert_eq!(usd.format(0.0), "$0.00");
        assert_eq!(usd.format(-20.0), "-$20.00");
    }

    #[test]
    fn formats_unknown_code_with_prefix() {
        assert_eq!(Currency::new("SEK").format(10.0), "SEK 10.00");
    }

    #[test]
    fn yen_has_no_decimals() {
        assert_eq!(Currency::new("JPY").format(1500.0), "\u{a5}1,500");
    }

    #[test]
    fn parses_formatted_strings() {
        let usd = Currency::new("USD");
        assert_eq!(usd.parse("$1,234.50"), 1234.5);
        assert_eq!(usd.parse("30"), 30.0);
        assert_eq!(usd.parse(""), 0.0);
        assert_eq!(usd.parse("free"), 0.0);
    }
}
