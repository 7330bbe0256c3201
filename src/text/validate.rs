//! Validation predicates

use super::shape::SPACE_CLASS;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{SPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("valid regex")
});

/// Syntactic email check: `local@domain.tld` with no whitespace and a single `@`.
///
/// This is a heuristic, not RFC 5322 validation. A domain without a dot
/// (`user@localhost`) is rejected.
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// True if `text` is non-empty and made only of ASCII letters
pub fn is_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
}
