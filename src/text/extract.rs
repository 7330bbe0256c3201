//! Extraction helpers

use super::shape::SPACE_CLASS;
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("https?://[^{SPACE_CLASS}]+")).expect("valid regex"));

/// A number pulled out of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    /// A digit run too long for `i64`
    Float(f64),
}

impl Number {
    fn parse(digits: &str) -> Self {
        match digits.parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Float(digits.parse::<f64>().unwrap_or(f64::INFINITY)),
        }
    }
}

/// Parse every maximal run of ASCII digits, in order.
///
/// Signs and decimal points are not part of a run, so `"Price: $19.99"`
/// yields `[19, 99]`.
pub fn extract_numbers(text: &str) -> Vec<Number> {
    DIGIT_RUN_RE
        .find_iter(text)
        .map(|m| Number::parse(m.as_str()))
        .collect()
}

/// Find every `http://` or `https://` URL, in order.
///
/// A URL runs to the next whitespace, so trailing punctuation such as a
/// sentence period is part of the match.
pub fn extract_urls(text: &str) -> Vec<&str> {
    URL_RE.find_iter(text).map(|m| m.as_str()).collect()
}
