//! Value-level string helpers
//!
//! Every helper accepts any script value and checks the type up front.
//! Text transforms hand non-string input back untouched. Counts fall back
//! to `0`, predicates to `false`, extractions to an empty array.

use super::value::{as_number, as_offset, as_text, coerce_number};
use crate::locale::{CurrencyFormatter, LocaleTable};
use crate::text::{self, Number};
use rhai::{Array, Dynamic, EvalAltResult, INT};
use std::sync::LazyLock;

static BUILTIN_LOCALES: LazyLock<LocaleTable> = LazyLock::new(LocaleTable::builtin);

/// Apply `transform` to string input, pass everything else through
fn map_text(data: Dynamic, transform: impl FnOnce(&str) -> String) -> Dynamic {
    match as_text(&data) {
        Some(text) => Dynamic::from(transform(text.as_str())),
        None => data,
    }
}

pub fn to_upper_case(data: Dynamic) -> Dynamic {
    map_text(data, text::to_upper_case)
}

pub fn to_lower_case(data: Dynamic) -> Dynamic {
    map_text(data, text::to_lower_case)
}

pub fn capitalize(data: Dynamic) -> Dynamic {
    map_text(data, text::capitalize)
}

pub fn to_title_case(data: Dynamic) -> Dynamic {
    map_text(data, text::to_title_case)
}

pub fn trim(data: Dynamic) -> Dynamic {
    map_text(data, text::trim)
}

/// Non-numeric or NaN `max_length` passes `data` through
pub fn truncate(data: Dynamic, max_length: Dynamic) -> Dynamic {
    let Some(max_length) = as_number(&max_length).filter(|n| !n.is_nan()) else {
        return data;
    };
    // floor keeps `len > max_length` exact for fractional limits
    map_text(data, |t| text::truncate(t, max_length.floor() as i64))
}

/// `max_length` below 1 or non-numeric passes `data` through
pub fn word_wrap(data: Dynamic, max_length: Dynamic) -> Dynamic {
    let Some(width) = as_number(&max_length).filter(|n| *n >= 1.0) else {
        return data;
    };
    map_text(data, |t| text::word_wrap(t, width.floor() as usize))
}

pub fn reverse(data: Dynamic) -> Dynamic {
    map_text(data, text::reverse)
}

/// Non-string `search` or `replacement` passes `data` through
pub fn replace_all(data: Dynamic, search: Dynamic, replacement: Dynamic) -> Dynamic {
    let (Some(search), Some(replacement)) = (as_text(&search), as_text(&replacement)) else {
        return data;
    };
    map_text(data, |t| {
        text::replace_all(t, search.as_str(), replacement.as_str())
    })
}

/// See [`text::count_occurrences`]: `search` is a pattern, not a literal
pub fn count_occurrences(data: Dynamic, search: Dynamic) -> INT {
    match (as_text(&data), as_text(&search)) {
        (Some(text), Some(search)) => text::count_occurrences(text.as_str(), search.as_str()) as INT,
        _ => 0,
    }
}

pub fn extract_numbers(data: Dynamic) -> Array {
    let Some(text) = as_text(&data) else {
        return Array::new();
    };
    text::extract_numbers(text.as_str())
        .into_iter()
        .map(|n| match n {
            Number::Int(n) => Dynamic::from_int(n),
            Number::Float(f) => Dynamic::from_float(f),
        })
        .collect()
}

pub fn extract_urls(data: Dynamic) -> Array {
    let Some(text) = as_text(&data) else {
        return Array::new();
    };
    text::extract_urls(text.as_str())
        .into_iter()
        .map(|url| Dynamic::from(url.to_string()))
        .collect()
}

pub fn is_valid_email(data: Dynamic) -> bool {
    as_text(&data).is_some_and(|t| text::is_valid_email(t.as_str()))
}

pub fn is_alpha(data: Dynamic) -> bool {
    as_text(&data).is_some_and(|t| text::is_alpha(t.as_str()))
}

pub fn slugify(data: Dynamic) -> Dynamic {
    map_text(data, text::slugify)
}

pub fn remove_special_chars(data: Dynamic) -> Dynamic {
    map_text(data, text::remove_special_chars)
}

/// Mask `[start, end)` of string input.
///
/// Non-numeric offsets pass `data` through; a non-string `mask_char` falls
/// back to [`text::DEFAULT_MASK_CHAR`].
pub fn mask(data: Dynamic, start: Dynamic, end: Dynamic, mask_char: Dynamic) -> Dynamic {
    let (Some(start), Some(end)) = (as_offset(&start), as_offset(&end)) else {
        return data;
    };
    let filler = as_text(&mask_char);
    let filler = filler
        .as_ref()
        .map_or(text::DEFAULT_MASK_CHAR, |f| f.as_str());
    map_text(data, |t| text::mask(t, start, end, filler))
}

pub fn to_base64(data: Dynamic) -> Dynamic {
    map_text(data, text::to_base64)
}

/// Best-effort decode, see [`text::from_base64`]
pub fn from_base64(data: Dynamic) -> Dynamic {
    map_text(data, text::from_base64)
}

/// Format `data` as money with the built-in [`LocaleTable`]
pub fn to_currency(data: Dynamic, currency: &str, locale: &str) -> Dynamic {
    to_currency_with(&*BUILTIN_LOCALES, data, currency, locale)
}

/// Format `data` as money with any [`CurrencyFormatter`].
///
/// Input that does not coerce to a number, or coerces to NaN, passes
/// through. So does input the formatter rejects (a malformed currency code
/// or locale tag).
pub fn to_currency_with(
    formatter: &dyn CurrencyFormatter,
    data: Dynamic,
    currency: &str,
    locale: &str,
) -> Dynamic {
    let Some(value) = coerce_number(&data).filter(|n| !n.is_nan()) else {
        return data;
    };
    match formatter.format(value, currency, locale) {
        Ok(formatted) => Dynamic::from(formatted),
        Err(err) => {
            tracing::debug!(%err, "to_currency: passing value through");
            data
        }
    }
}

/// Random string of `length` characters from `charset`.
///
/// Fractional lengths round up; negative, NaN, infinite or non-numeric
/// lengths give an empty string. A length above [`text::MAX_RANDOM_LENGTH`]
/// is a script error rather than an allocation. Not suitable for secrets.
pub fn random(length: Dynamic, charset: &str) -> Result<String, Box<EvalAltResult>> {
    let count = as_number(&length)
        .filter(|n| n.is_finite() && *n > 0.0)
        .map_or(0, |n| n.ceil() as usize);
    if count > text::MAX_RANDOM_LENGTH {
        return Err(format!(
            "random: length {} exceeds the maximum of {}",
            count,
            text::MAX_RANDOM_LENGTH
        )
        .into());
    }
    Ok(text::random(count, charset))
}
