//! Script-facing text helpers
//!
//! Scripts reach every helper through the `text` module:
//!
//! ```rhai
//! let slug = text::slugify(title);
//! let shown = text::mask(card, 0, 12);
//! let price = text::to_currency(amount, "EUR", "de-DE");
//! ```
//!
//! A module keeps these names apart from rhai's own string methods
//! (`trim`, `truncate`), which mutate in place and return `()`.
//!
//! ## Design: Passthrough, not errors
//!
//! Helpers never throw on a wrong argument type. A transform given a
//! non-string returns it unchanged, so heterogeneous data can be piped
//! through without guards:
//!
//! ```rhai
//! text::to_upper_case(42)        // 42
//! text::count_occurrences(42, 4) // 0
//! ```
//!
//! ## Categories
//!
//! - **case**: to_upper_case, to_lower_case, capitalize, to_title_case
//! - **shape**: trim, truncate, word_wrap, reverse
//! - **search**: replace_all, count_occurrences
//! - **extract**: extract_numbers, extract_urls
//! - **validate**: is_valid_email, is_alpha
//! - **rewrite**: slugify, remove_special_chars, mask
//! - **encoding**: to_base64, from_base64
//! - **format**: to_currency
//! - **random**: random
//! - **log** (global): log, warn

pub mod log;
pub mod string;
mod value;

pub use value::coerce_number;

use crate::config::Defaults;
use crate::locale::CurrencyFormatter;
use rhai::{Dynamic, EvalAltResult, Module};
use std::sync::Arc;

/// One function of the `text` module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub usage: &'static str,
}

const fn info(name: &'static str, min_args: usize, max_args: usize, usage: &'static str) -> FunctionInfo {
    FunctionInfo {
        name,
        min_args,
        max_args,
        usage,
    }
}

/// Every function registered in the `text` module
pub const FUNCTIONS: &[FunctionInfo] = &[
    info("to_upper_case", 1, 1, "to_upper_case(text)"),
    info("to_lower_case", 1, 1, "to_lower_case(text)"),
    info("capitalize", 1, 1, "capitalize(text)"),
    info("to_title_case", 1, 1, "to_title_case(text)"),
    info("trim", 1, 1, "trim(text)"),
    info("truncate", 2, 2, "truncate(text, max_length)"),
    info("word_wrap", 2, 2, "word_wrap(text, max_length)"),
    info("reverse", 1, 1, "reverse(text)"),
    info("replace_all", 3, 3, "replace_all(text, search, replacement)"),
    info("count_occurrences", 2, 2, "count_occurrences(text, pattern)"),
    info("extract_numbers", 1, 1, "extract_numbers(text)"),
    info("extract_urls", 1, 1, "extract_urls(text)"),
    info("is_valid_email", 1, 1, "is_valid_email(text)"),
    info("is_alpha", 1, 1, "is_alpha(text)"),
    info("slugify", 1, 1, "slugify(text)"),
    info("remove_special_chars", 1, 1, "remove_special_chars(text)"),
    info("mask", 3, 4, "mask(text, start, end, [mask_char])"),
    info("to_base64", 1, 1, "to_base64(text)"),
    info("from_base64", 1, 1, "from_base64(text)"),
    info("to_currency", 1, 3, "to_currency(value, [currency], [locale])"),
    info("random", 1, 2, "random(length, [charset])"),
];

/// Look up a `text` module function by name
pub fn function(name: &str) -> Option<&'static FunctionInfo> {
    FUNCTIONS.iter().find(|f| f.name == name)
}

fn ok<T>(value: T) -> Result<T, Box<EvalAltResult>> {
    Ok(value)
}

/// Build the `text` module.
///
/// `formatter` backs `to_currency`; `defaults` fill in the optional
/// currency, locale and charset arguments.
pub fn text_module(formatter: Arc<dyn CurrencyFormatter>, defaults: &Defaults) -> Module {
    let mut module = Module::new();

    // Case transforms
    module.set_native_fn("to_upper_case", |data: Dynamic| ok(string::to_upper_case(data)));
    module.set_native_fn("to_lower_case", |data: Dynamic| ok(string::to_lower_case(data)));
    module.set_native_fn("capitalize", |data: Dynamic| ok(string::capitalize(data)));
    module.set_native_fn("to_title_case", |data: Dynamic| ok(string::to_title_case(data)));

    // Whitespace and shape
    module.set_native_fn("trim", |data: Dynamic| ok(string::trim(data)));
    module.set_native_fn("truncate", |data: Dynamic, max: Dynamic| {
        ok(string::truncate(data, max))
    });
    module.set_native_fn("word_wrap", |data: Dynamic, max: Dynamic| {
        ok(string::word_wrap(data, max))
    });
    module.set_native_fn("reverse", |data: Dynamic| ok(string::reverse(data)));

    // Search and replace
    module.set_native_fn(
        "replace_all",
        |data: Dynamic, search: Dynamic, replacement: Dynamic| {
            ok(string::replace_all(data, search, replacement))
        },
    );
    module.set_native_fn("count_occurrences", |data: Dynamic, search: Dynamic| {
        ok(string::count_occurrences(data, search))
    });

    // Extraction and validation
    module.set_native_fn("extract_numbers", |data: Dynamic| ok(string::extract_numbers(data)));
    module.set_native_fn("extract_urls", |data: Dynamic| ok(string::extract_urls(data)));
    module.set_native_fn("is_valid_email", |data: Dynamic| ok(string::is_valid_email(data)));
    module.set_native_fn("is_alpha", |data: Dynamic| ok(string::is_alpha(data)));

    // Structural rewrites
    module.set_native_fn("slugify", |data: Dynamic| ok(string::slugify(data)));
    module.set_native_fn("remove_special_chars", |data: Dynamic| {
        ok(string::remove_special_chars(data))
    });
    module.set_native_fn("mask", |data: Dynamic, start: Dynamic, end: Dynamic| {
        ok(string::mask(data, start, end, Dynamic::UNIT))
    });
    module.set_native_fn(
        "mask",
        |data: Dynamic, start: Dynamic, end: Dynamic, mask_char: Dynamic| {
            ok(string::mask(data, start, end, mask_char))
        },
    );

    // Encoding
    module.set_native_fn("to_base64", |data: Dynamic| ok(string::to_base64(data)));
    module.set_native_fn("from_base64", |data: Dynamic| ok(string::from_base64(data)));

    // Currency
    {
        let (formatter, currency, locale) = (
            formatter.clone(),
            defaults.currency.clone(),
            defaults.locale.clone(),
        );
        module.set_native_fn("to_currency", move |data: Dynamic| {
            ok(string::to_currency_with(formatter.as_ref(), data, &currency, &locale))
        });
    }
    {
        let (formatter, locale) = (formatter.clone(), defaults.locale.clone());
        module.set_native_fn("to_currency", move |data: Dynamic, currency: Dynamic| {
            ok(currency_call(formatter.as_ref(), data, &currency, &locale))
        });
    }
    module.set_native_fn(
        "to_currency",
        move |data: Dynamic, currency: Dynamic, locale: Dynamic| {
            let locale = match string_arg(&locale) {
                Some(locale) => locale,
                None => return ok(data),
            };
            ok(currency_call(formatter.as_ref(), data, &currency, &locale))
        },
    );

    // Generation
    {
        let charset = defaults.charset.clone();
        module.set_native_fn("random", move |length: Dynamic| {
            string::random(length, &charset)
        });
    }
    {
        let charset = defaults.charset.clone();
        module.set_native_fn("random", move |length: Dynamic, custom: Dynamic| {
            let custom = string_arg(&custom).unwrap_or_else(|| charset.clone());
            string::random(length, &custom)
        });
    }

    module.build_index();
    module
}

fn string_arg(value: &Dynamic) -> Option<String> {
    value::as_text(value).map(|s| s.to_string())
}

/// `to_currency` with a script-supplied currency; a non-string code passes `data` through
fn currency_call(
    formatter: &dyn CurrencyFormatter,
    data: Dynamic,
    currency: &Dynamic,
    locale: &str,
) -> Dynamic {
    match string_arg(currency) {
        Some(currency) => string::to_currency_with(formatter, data, &currency, locale),
        None => data,
    }
}
