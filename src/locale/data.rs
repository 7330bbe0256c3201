//! Built-in locale and currency data

use super::{CurrencyInfo, Grouping, LocaleConventions, SymbolPlacement};
use std::collections::BTreeMap;

const NARROW_NO_BREAK_SPACE: &str = "\u{202f}";
const NO_BREAK_SPACE: &str = "\u{a0}";
const RIGHT_SINGLE_QUOTE: &str = "\u{2019}";

fn conventions(
    group: &str,
    decimal: &str,
    pattern: SymbolPlacement,
    symbols: &[(&str, &str)],
) -> LocaleConventions {
    LocaleConventions {
        group: group.to_string(),
        decimal: decimal.to_string(),
        pattern,
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        symbols: symbols
            .iter()
            .map(|(code, symbol)| (code.to_string(), symbol.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub(super) fn locales() -> Vec<(&'static str, LocaleConventions)> {
    use SymbolPlacement::{Prefix, PrefixSpace, Suffix};

    vec![
        ("en-US", conventions(",", ".", Prefix, &[])),
        ("en-GB", conventions(",", ".", Prefix, &[("USD", "US$")])),
        (
            "en-IN",
            LocaleConventions {
                grouping: Grouping::Indian,
                ..conventions(",", ".", Prefix, &[])
            },
        ),
        ("de-DE", conventions(".", ",", Suffix, &[])),
        ("de-CH", conventions(RIGHT_SINGLE_QUOTE, ".", PrefixSpace, &[])),
        ("fr-FR", conventions(NARROW_NO_BREAK_SPACE, ",", Suffix, &[("USD", "$US")])),
        (
            "es-ES",
            LocaleConventions {
                min_grouping_digits: 2,
                ..conventions(".", ",", Suffix, &[("USD", "US$")])
            },
        ),
        ("it-IT", conventions(".", ",", Suffix, &[("USD", "USD")])),
        ("pt-BR", conventions(".", ",", PrefixSpace, &[("USD", "US$")])),
        ("ja-JP", conventions(",", ".", Prefix, &[("JPY", "￥")])),
        ("zh-CN", conventions(",", ".", Prefix, &[("CNY", "¥"), ("JPY", "JP¥"), ("USD", "US$")])),
        ("th-TH", conventions(",", ".", Prefix, &[("THB", "฿"), ("USD", "US$")])),
        ("ru-RU", conventions(NO_BREAK_SPACE, ",", Suffix, &[("RUB", "₽")])),
    ]
}

pub(super) fn currencies() -> Vec<(&'static str, CurrencyInfo)> {
    let info = |symbol: &str, fraction_digits: u8| CurrencyInfo {
        symbol: symbol.to_string(),
        fraction_digits,
    };

    vec![
        ("USD", info("$", 2)),
        ("EUR", info("€", 2)),
        ("GBP", info("£", 2)),
        ("JPY", info("¥", 0)),
        ("INR", info("₹", 2)),
        ("CNY", info("CN¥", 2)),
        ("THB", info("THB", 2)),
        ("BRL", info("R$", 2)),
        ("CHF", info("CHF", 2)),
        ("KRW", info("₩", 0)),
        ("RUB", info("RUB", 2)),
        ("CAD", info("CA$", 2)),
        ("AUD", info("A$", 2)),
        ("NZD", info("NZ$", 2)),
        ("HKD", info("HK$", 2)),
        ("MXN", info("MX$", 2)),
        ("TWD", info("NT$", 2)),
        ("ILS", info("₪", 2)),
        ("PHP", info("₱", 2)),
        ("VND", info("₫", 0)),
        ("SEK", info("SEK", 2)),
        ("NOK", info("NOK", 2)),
        ("DKK", info("DKK", 2)),
        ("PLN", info("PLN", 2)),
        ("CZK", info("CZK", 2)),
        ("SGD", info("SGD", 2)),
        ("ZAR", info("ZAR", 2)),
        ("TRY", info("TRY", 2)),
        ("ISK", info("ISK", 0)),
        ("CLP", info("CLP", 0)),
        // three fraction digits
        ("BHD", info("BHD", 3)),
        ("JOD", info("JOD", 3)),
        ("KWD", info("KWD", 3)),
        ("OMR", info("OMR", 3)),
        ("TND", info("TND", 3)),
    ]
}

/// The region a bare language most likely means
pub(super) fn likely_locale(language: &str) -> Option<&'static str> {
    let tag = match language {
        "en" => "en-US",
        "de" => "de-DE",
        "fr" => "fr-FR",
        "es" => "es-ES",
        "it" => "it-IT",
        "pt" => "pt-BR",
        "ja" => "ja-JP",
        "zh" => "zh-CN",
        "th" => "th-TH",
        "ru" => "ru-RU",
        _ => return None,
    };
    Some(tag)
}
