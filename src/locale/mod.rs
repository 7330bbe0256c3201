//! Locale-aware currency formatting
//!
//! Currency formatting is a collaborator behind the [`CurrencyFormatter`]
//! trait. The crate ships [`LocaleTable`], a table of locale conventions and
//! currency data; callers can extend it from config or swap in any other
//! implementation. The table only formats what it has data for: a locale or
//! currency it does not know is an error, never a guess.

mod data;

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Locale used when the caller gives none
pub const DEFAULT_LOCALE: &str = "en-US";
/// Currency used when the caller gives none
pub const DEFAULT_CURRENCY: &str = "USD";

const NO_BREAK_SPACE: char = '\u{a0}';

/// Errors reported by a [`CurrencyFormatter`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid currency code: {0:?} (expected three ASCII letters)")]
    InvalidCurrency(String),

    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),

    #[error("no formatting data for locale {0:?}")]
    UnsupportedLocale(String),

    #[error("no formatting data for currency {0:?}")]
    UnsupportedCurrency(String),
}

/// Formats a number as an amount of money for a locale
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, value: f64, currency: &str, locale: &str) -> Result<String, FormatError>;
}

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPlacement {
    /// `$1.00`, or `CHF 1.00` when the symbol ends in a letter
    #[default]
    Prefix,
    /// `R$ 1,00`
    PrefixSpace,
    /// `1,00 €`
    Suffix,
}

/// How integer digits are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    /// 1,234,567
    #[default]
    Standard,
    /// 12,34,567
    Indian,
}

/// Number conventions of one locale
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleConventions {
    pub group: String,
    pub decimal: String,
    #[serde(default)]
    pub pattern: SymbolPlacement,
    #[serde(default)]
    pub grouping: Grouping,
    /// Integers shorter than `3 + min_grouping_digits` digits are not grouped
    #[serde(default = "default_min_grouping_digits")]
    pub min_grouping_digits: usize,
    /// Per-locale currency symbols, keyed by currency code
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,
}

fn default_min_grouping_digits() -> usize {
    1
}

/// Symbol and precision of one currency
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencyInfo {
    pub symbol: String,
    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: u8,
}

fn default_fraction_digits() -> u8 {
    2
}

/// Table-driven [`CurrencyFormatter`]
///
/// Locale lookup tries the exact tag; a bare language tag (`de`) maps to its
/// usual region (`de-DE`). A region the table has no data for (`de-AT`) is
/// [`FormatError::UnsupportedLocale`] rather than a neighbour's conventions,
/// and an unknown currency is [`FormatError::UnsupportedCurrency`].
#[derive(Debug, Clone)]
pub struct LocaleTable {
    locales: BTreeMap<String, LocaleConventions>,
    currencies: BTreeMap<String, CurrencyInfo>,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocaleTable {
    /// The built-in conventions and currencies
    pub fn builtin() -> Self {
        let mut table = Self {
            locales: BTreeMap::new(),
            currencies: BTreeMap::new(),
        };
        for (tag, conventions) in data::locales() {
            table.locales.insert(locale_key(tag), conventions);
        }
        for (code, info) in data::currencies() {
            table.currencies.insert(code.to_string(), info);
        }
        table
    }

    /// Add or replace a locale
    pub fn with_locale(
        mut self,
        tag: &str,
        mut conventions: LocaleConventions,
    ) -> Result<Self, FormatError> {
        let key = normalize_locale(tag)?;
        conventions.symbols = conventions
            .symbols
            .into_iter()
            .map(|(code, symbol)| normalize_currency(&code).map(|code| (code, symbol)))
            .collect::<Result<_, _>>()?;
        self.locales.insert(key, conventions);
        Ok(self)
    }

    /// Add or replace a currency
    pub fn with_currency(mut self, code: &str, info: CurrencyInfo) -> Result<Self, FormatError> {
        let code = normalize_currency(code)?;
        self.currencies.insert(code, info);
        Ok(self)
    }

    /// Resolve a locale tag to the conventions that will be used for it
    pub fn resolve(&self, tag: &str) -> Result<&LocaleConventions, FormatError> {
        let key = normalize_locale(tag)?;
        if let Some(conventions) = self.locales.get(&key) {
            return Ok(conventions);
        }

        if !key.contains('-') {
            let likely = data::likely_locale(&key).map(locale_key);
            if let Some(conventions) = likely.and_then(|k| self.locales.get(&k)) {
                return Ok(conventions);
            }
        }
        Err(FormatError::UnsupportedLocale(tag.to_string()))
    }

    /// Symbol and precision of a currency
    pub fn currency(&self, code: &str) -> Result<&CurrencyInfo, FormatError> {
        let code = normalize_currency(code)?;
        self.currencies
            .get(&code)
            .ok_or(FormatError::UnsupportedCurrency(code))
    }
}

impl CurrencyFormatter for LocaleTable {
    fn format(&self, value: f64, currency: &str, locale: &str) -> Result<String, FormatError> {
        let code = normalize_currency(currency)?;
        let info = self.currency(&code)?;
        let conventions = self.resolve(locale)?;

        let symbol = conventions.symbols.get(&code).unwrap_or(&info.symbol);
        let number = format_amount(value.abs(), info.fraction_digits, conventions);

        let mut out = String::new();
        if value.is_sign_negative() && !value.is_nan() {
            out.push('-');
        }
        match conventions.pattern {
            SymbolPlacement::Prefix => {
                out.push_str(symbol);
                if symbol.chars().last().is_some_and(char::is_alphabetic) {
                    out.push(NO_BREAK_SPACE);
                }
                out.push_str(&number);
            }
            SymbolPlacement::PrefixSpace => {
                out.push_str(symbol);
                out.push(NO_BREAK_SPACE);
                out.push_str(&number);
            }
            SymbolPlacement::Suffix => {
                out.push_str(&number);
                out.push(NO_BREAK_SPACE);
                out.push_str(symbol);
            }
        }
        Ok(out)
    }
}

/// Render a non-negative amount with grouping and a fixed number of fraction digits.
///
/// Rounds half away from zero on the shortest decimal form of `abs`, so
/// `1.005` rounds to `1.01` even though the nearest double is just below it.
fn format_amount(abs: f64, fraction_digits: u8, conventions: &LocaleConventions) -> String {
    if abs.is_nan() {
        return "NaN".to_string();
    }
    if abs.is_infinite() {
        return "∞".to_string();
    }

    let (int_part, frac_part) = round_decimal(abs, usize::from(fraction_digits));
    let mut out = group_integer(&int_part, conventions);
    if !frac_part.is_empty() {
        out.push_str(&conventions.decimal);
        out.push_str(&frac_part);
    }
    out
}

/// Integer and fraction digits of `abs` rounded to `digits` places
fn round_decimal(abs: f64, digits: usize) -> (String, String) {
    // `{:e}` gives the shortest digits that round-trip: "1.2345e0", "4e-3"
    let sci = format!("{:e}", abs);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let significant: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    // digits before the decimal point
    let point = exponent + 1;
    let mut whole: Vec<u8> = Vec::new();
    let mut fraction: Vec<u8> = Vec::new();
    if point <= 0 {
        whole.push(b'0');
        fraction.extend(std::iter::repeat_n(b'0', point.unsigned_abs() as usize));
        fraction.extend(&significant);
    } else {
        let point = point as usize;
        if point >= significant.len() {
            whole.extend(&significant);
            whole.extend(std::iter::repeat_n(b'0', point - significant.len()));
        } else {
            whole.extend(&significant[..point]);
            fraction.extend(&significant[point..]);
        }
    }

    let round_up = fraction.get(digits).is_some_and(|d| *d >= b'5');
    fraction.resize(digits, b'0');

    let mut kept: Vec<u8> = whole.iter().chain(fraction.iter()).copied().collect();
    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let int_part = String::from_utf8_lossy(&kept[..split]).into_owned();
    let frac_part = String::from_utf8_lossy(&kept[split..]).into_owned();
    (int_part, frac_part)
}

fn group_integer(digits: &str, conventions: &LocaleConventions) -> String {
    if digits.len() < 3 + conventions.min_grouping_digits.max(1) {
        return digits.to_string();
    }

    let size = match conventions.grouping {
        Grouping::Standard => 3,
        Grouping::Indian => 2,
    };
    let (mut rest, last) = digits.split_at(digits.len() - 3);
    let mut groups = vec![last];
    while rest.len() > size {
        let (head, tail) = rest.split_at(rest.len() - size);
        groups.push(tail);
        rest = head;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    groups.join(&conventions.group)
}

fn locale_key(tag: &str) -> String {
    tag.replace('_', "-").to_ascii_lowercase()
}

/// Validate a BCP 47 shaped tag and return its lookup key
pub(crate) fn normalize_locale(tag: &str) -> Result<String, FormatError> {
    let invalid = || FormatError::InvalidLocale(tag.to_string());
    let mut subtags = tag.split(['-', '_']);
    let language = subtags.next().ok_or_else(invalid)?;
    if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    for subtag in subtags {
        if !(1..=8).contains(&subtag.len()) || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid());
        }
    }
    Ok(locale_key(tag))
}

/// Validate an ISO 4217 shaped code and upper-case it
pub(crate) fn normalize_currency(code: &str) -> Result<String, FormatError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(FormatError::InvalidCurrency(code.to_string()))
    }
}
