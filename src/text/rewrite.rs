//! Structural rewrites: slugs, stripping, masking

use super::shape::{SPACE_CLASS, is_space};
use regex::Regex;
use std::sync::LazyLock;

/// Filler used by [`mask`] when the caller gives none
pub const DEFAULT_MASK_CHAR: &str = "*";

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[^A-Za-z0-9_{SPACE_CLASS}-]")).expect("valid regex"));
static SEPARATOR_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[{SPACE_CLASS}_-]+")).expect("valid regex"));

/// Build a URL-friendly slug.
///
/// Lower-cases and trims, drops everything except ASCII letters, digits,
/// underscores, whitespace and hyphens, collapses runs of whitespace,
/// underscores and hyphens into one hyphen, then strips edge hyphens.
///
/// ```
/// use textkit::text::slugify;
/// assert_eq!(slugify("Hello World!"), "hello-world");
/// assert_eq!(slugify("__Hello--World__"), "hello-world");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_SLUG_RE.replace_all(lowered.trim_matches(is_space), "");
    let collapsed = SEPARATOR_RUN_RE.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Keep ASCII letters and digits, drop everything else (spaces included)
pub fn remove_special_chars(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Replace the characters in `[start, end)` with `mask_char` repeated once
/// per masked character.
///
/// Both offsets are clamped into `0..=len`. A negative `end` clamps to `0`;
/// it does NOT count back from the end of the text. If `end` falls before
/// `start` after clamping the range is empty and `text` comes back as is.
///
/// ```
/// use textkit::text::mask;
/// assert_eq!(mask("1234567890", 4, 8, "*"), "1234****90");
/// assert_eq!(mask("password", 1, -1, "*"), "password");
/// ```
pub fn mask(text: &str, start: i64, end: i64, mask_char: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len() as i64;
    let start = start.clamp(0, len);
    let end = end.clamp(0, len).max(start);
    let (start, end) = (start as usize, end as usize);

    let mut out = String::with_capacity(text.len() + mask_char.len() * (end - start));
    out.extend(&chars[..start]);
    out.push_str(&mask_char.repeat(end - start));
    out.extend(&chars[end..]);
    out
}
