//! Case transforms

use super::shape::SPACE_CLASS;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// A title-case token starts on an ASCII word char and runs to the next whitespace.
static TITLE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[A-Za-z0-9_][^{SPACE_CLASS}]*")).expect("valid regex"));

/// Upper-case every character
pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

/// Lower-case every character
pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

/// Upper-case the first character and leave the remainder untouched.
///
/// ```
/// assert_eq!(textkit::text::capitalize("hello world"), "Hello world");
/// assert_eq!(textkit::text::capitalize("hELLO"), "HELLO");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-case every word: first character upper, the rest lower.
///
/// A word is a run of non-whitespace that begins with an ASCII letter, digit
/// or underscore. Underscores do not split words, so `hello_world` becomes
/// `Hello_world`. A leading non-word character (`(hello)`) is skipped and
/// the word starts right after it.
pub fn to_title_case(text: &str) -> String {
    TITLE_TOKEN_RE
        .replace_all(text, |caps: &Captures| title_word(&caps[0]))
        .into_owned()
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out: String = first.to_uppercase().collect();
    out.push_str(&chars.as_str().to_lowercase());
    out
}
