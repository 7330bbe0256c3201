//! Whitespace and shape transforms

/// Marker appended by [`truncate`]
pub const ELLIPSIS: &str = "...";

/// Regex class body matching exactly the characters [`is_space`] accepts.
///
/// Splice it into a bracket expression: `[^{SPACE_CLASS}]` is a non-space.
pub(crate) const SPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Remove leading and trailing whitespace.
///
/// Whitespace is the Unicode `White_Space` set without NEXT LINE (U+0085),
/// plus the byte order mark.
pub fn trim(text: &str) -> String {
    text.trim_matches(is_space).to_string()
}

/// Whitespace as every helper in this crate sees it.
///
/// The Unicode `White_Space` set without NEXT LINE (U+0085), plus the byte
/// order mark (U+FEFF). This is the set web scripts trim and match with `\s`.
pub(crate) fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Cut `text` to `max_length` characters and append [`ELLIPSIS`].
///
/// Text that already fits is returned as is. A zero or negative
/// `max_length` leaves only the ellipsis.
pub fn truncate(text: &str, max_length: i64) -> String {
    let len = text.chars().count() as i64;
    if len <= max_length {
        return text.to_string();
    }

    let keep = max_length.max(0) as usize;
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Reverse the characters of `text`.
///
/// This reverses scalar values, not grapheme clusters: a combining mark ends
/// up before the base letter it belonged to, and multi-codepoint emoji are
/// split apart.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Insert line breaks so lines stay within `max_length` characters.
///
/// Scanning left to right, a break replaces the last whitespace character
/// that follows at most `max_length` non-newline characters. The final
/// fragment is never wrapped, and a single token longer than `max_length`
/// is left intact (the line overflows).
///
/// ```
/// use textkit::text::word_wrap;
/// assert_eq!(word_wrap("Long text here", 4), "Long\ntext\nhere");
/// assert_eq!(word_wrap("VeryLongWord", 4), "VeryLongWord");
/// ```
pub fn word_wrap(text: &str, max_length: usize) -> String {
    if max_length == 0 {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while pos < chars.len() {
        match wrap_point(&chars, pos, max_length) {
            Some(line_len) => {
                out.extend(&chars[pos..pos + line_len]);
                out.push('\n');
                pos += line_len + 1;
            }
            None => {
                out.push(chars[pos]);
                pos += 1;
            }
        }
    }
    out
}

/// Length of the line starting at `pos` if a break belongs after it
fn wrap_point(chars: &[char], pos: usize, max_length: usize) -> Option<usize> {
    let rest = &chars[pos..];
    // The tail that already fits on one line stays as it is.
    if rest.len() <= max_length && !rest.contains(&'\n') {
        return None;
    }

    let run = rest
        .iter()
        .take(max_length)
        .take_while(|&&c| c != '\n')
        .count();
    (1..=run)
        .rev()
        .find(|&len| rest.get(len).is_some_and(|&c| is_space(c)))
}
