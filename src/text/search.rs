//! Search and replace helpers

use regex::Regex;

/// Replace every occurrence of `search` with `replacement`.
///
/// `search` is a literal. Matching runs left to right without overlap.
/// An empty `search` puts `replacement` between every pair of characters,
/// never before the first or after the last one.
pub fn replace_all(text: &str, search: &str, replacement: &str) -> String {
    if !search.is_empty() {
        return text.replace(search, replacement);
    }

    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push_str(replacement);
        }
        out.push(c);
    }
    out
}

/// Count non-overlapping matches of `pattern` in `text`.
///
/// `pattern` is compiled as a regular expression exactly as given, it is
/// NOT escaped: `"."` counts every character and `"a+"` counts runs. Callers
/// wanting a literal count must escape it themselves (`regex::escape`).
/// A pattern that fails to compile counts as zero matches.
///
/// Empty matches count wherever the search lands, including right where the
/// previous match ended; the search then steps one character forward. So
/// `"a*"` finds three matches in `"baaa"` (before `b`, `aaa`, the end) and an
/// empty pattern matches at every character boundary. [`Regex::find_iter`]
/// skips an empty match that touches the previous one and would report two.
///
/// ```
/// use textkit::text::count_occurrences;
/// assert_eq!(count_occurrences("baaa", "a*"), 3);
/// ```
pub fn count_occurrences(text: &str, pattern: &str) -> usize {
    match Regex::new(pattern) {
        Ok(re) => count_matches(&re, text),
        Err(err) => {
            tracing::debug!(pattern, %err, "count_occurrences: pattern does not compile");
            0
        }
    }
}

fn count_matches(re: &Regex, text: &str) -> usize {
    let mut count = 0;
    let mut at = 0;
    while at <= text.len() {
        let Some(m) = re.find_at(text, at) else {
            break;
        };
        count += 1;
        at = if m.is_empty() {
            // step past one whole character
            m.end() + text[m.end()..].chars().next().map_or(1, char::len_utf8)
        } else {
            m.end()
        };
    }
    count
}
