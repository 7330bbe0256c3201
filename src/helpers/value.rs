//! Reading typed arguments out of script values

use crate::text::shape::is_space;
use rhai::{Dynamic, ImmutableString};

/// The string held by `value`, if it is one
pub(crate) fn as_text(value: &Dynamic) -> Option<ImmutableString> {
    if value.is_string() {
        value.clone().into_immutable_string().ok()
    } else {
        None
    }
}

/// Integers and floats; every other type is not a number here
pub(crate) fn as_number(value: &Dynamic) -> Option<f64> {
    if let Ok(n) = value.as_int() {
        return Some(n as f64);
    }
    value.as_float().ok()
}

/// An offset truncated toward zero. NaN reads as 0.
pub(crate) fn as_offset(value: &Dynamic) -> Option<i64> {
    if let Ok(n) = value.as_int() {
        return Some(n);
    }
    value.as_float().ok().map(|f| f.trunc() as i64)
}

/// Loose numeric coercion used by currency formatting.
///
/// Numbers pass as is, booleans read as 1 and 0, strings are trimmed and
/// parsed (empty reads as 0; `Infinity`, `0x`/`0o`/`0b` literals and plain
/// decimals are accepted), an empty array reads as 0 and a one-element array
/// as its element. Everything else, `()` included, is not a number.
pub fn coerce_number(value: &Dynamic) -> Option<f64> {
    if let Some(n) = as_number(value) {
        return Some(n);
    }
    if let Ok(b) = value.as_bool() {
        return Some(if b { 1.0 } else { 0.0 });
    }
    if let Ok(c) = value.as_char() {
        return parse_number(c.encode_utf8(&mut [0; 4]));
    }
    if let Some(text) = as_text(value) {
        return parse_number(text.as_str());
    }
    if value.is_array() {
        let items = value.clone().into_array().ok()?;
        return match items.as_slice() {
            [] => Some(0.0),
            [only] if only.is_string() || as_number(only).is_some() => coerce_number(only),
            _ => None,
        };
    }
    None
}

fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_matches(is_space);
    match text {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let lower = text.get(..2).map(str::to_ascii_lowercase);
        if lower.as_deref() == Some(prefix) {
            return parse_radix(&text[2..], radix);
        }
    }

    let decimal_chars = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E');
    if !text.chars().all(decimal_chars) {
        return None;
    }
    text.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
