//! Heuristic number extraction from free-text posting fields.
//!
//! Postings carry prose like `"3-5 years"` or `"6-10 LPA"`. Only unsigned
//! runs of ASCII digits count; separators and signs are ignored, so
//! `"50,000"` reads as two integers. Runs too large for `i64` saturate.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("Invalid digit-run regex"));

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("Invalid leading integer regex"));

fn to_i64(digits: &str) -> i64 {
    digits.parse().unwrap_or(i64::MAX)
}

/// All digit runs in order of appearance.
pub fn integers(text: &str) -> impl Iterator<Item = i64> + '_ {
    DIGITS.find_iter(text).map(|m| to_i64(m.as_str()))
}

pub fn first_integer(text: &str) -> Option<i64> {
    integers(text).next()
}

pub fn last_integer(text: &str) -> Option<i64> {
    integers(text).last()
}

/// Integer prefix after optional whitespace and sign: `"3 years"` is 3,
/// `"about 3"` is `None`.
pub fn leading_integer(text: &str) -> Option<i64> {
    let captures = LEADING_INTEGER.captures(text)?;
    let raw = captures.get(1)?.as_str();
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) if raw.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
