//! Field-level pattern matching for statement text.
//!
//! Each helper matches one fixed-shape token and nothing else, so the row
//! parser stays a thin composition of these.

use regex::Regex;
use std::sync::OnceLock;

/// Phrase that opens the transactions section.
pub const SECTION_START: &str = "Detalle de Movimientos Realizados";
/// Phrase that closes the transactions section.
pub const SECTION_END: &str = "Total de Movimientos";
/// Number of lines after a row that may hold its reference text.
pub const REFERENCE_LOOKAHEAD: usize = 3;
/// Minimum whitespace tokens for a row to be accepted.
pub const MIN_TOKENS: usize = 6;

fn date_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{2}/[A-Z]{3}").expect("date token regex"))
}

fn leading_date_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}/[A-Z]{3}").expect("leading date token regex"))
}

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{1,3}(?:,\d{3})*\.\d{2}").expect("amount regex"))
}

fn clabe_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{20}\b").expect("clabe regex"))
}

fn tracking_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[A-Z]{4}\d{20}\b").expect("tracking key regex"))
}

/// True when a `DD/MON` token (e.g. `15/JAN`) appears anywhere in the line.
pub fn contains_date_token(line: &str) -> bool {
    date_token_re().is_match(line)
}

/// True when the line begins with a `DD/MON` token, i.e. it opens a new row.
pub fn starts_with_date_token(line: &str) -> bool {
    leading_date_token_re().is_match(line)
}

/// First thousands-grouped amount with two decimals, separators stripped.
///
/// `"PAGO 1,234.56 9.00"` gives `Some(1234.56)`.
pub fn first_amount(text: &str) -> Option<f64> {
    let m = amount_re().find(text)?;
    m.as_str().replace(',', "").parse().ok()
}

/// First standalone run of exactly 20 digits.
pub fn find_clabe(text: &str) -> Option<&str> {
    clabe_re().find(text).map(|m| m.as_str())
}

/// First standalone token of four uppercase letters followed by 20 digits.
pub fn find_tracking_key(text: &str) -> Option<&str> {
    tracking_key_re().find(text).map(|m| m.as_str())
}
