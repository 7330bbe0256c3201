//! Layered TOML configuration
//!
//! Layers, later ones winning field by field:
//!
//! 1. `/etc/textkit/config.toml`
//! 2. `$XDG_CONFIG_HOME/textkit/config.toml`
//! 3. an explicit path (`--config` / `TEXTKIT_CONFIG`)
//!
//! Missing files are skipped. Configuration only supplies defaults for
//! optional arguments and extra locale data; it never changes what a
//! helper does with its inputs.

use crate::locale::{
    self, CurrencyInfo, DEFAULT_CURRENCY, DEFAULT_LOCALE, FormatError, LocaleConventions,
    LocaleTable,
};
use crate::text::DEFAULT_CHARSET;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SYSTEM_CONFIG: &str = "/etc/textkit/config.toml";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Values used when a script leaves optional arguments out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub currency: String,
    pub locale: String,
    pub charset: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    default_currency: Option<String>,
    default_locale: Option<String>,
    default_charset: Option<String>,
    locales: Option<BTreeMap<String, LocaleConventions>>,
    currencies: Option<BTreeMap<String, CurrencyInfo>>,
}

impl ConfigToml {
    fn merge(&mut self, other: ConfigToml) {
        if other.default_currency.is_some() {
            self.default_currency = other.default_currency;
        }
        if other.default_locale.is_some() {
            self.default_locale = other.default_locale;
        }
        if other.default_charset.is_some() {
            self.default_charset = other.default_charset;
        }
        match (self.locales.as_mut(), other.locales) {
            (Some(dst), Some(src)) => dst.extend(src),
            (None, Some(src)) => self.locales = Some(src),
            _ => {}
        }
        match (self.currencies.as_mut(), other.currencies) {
            (Some(dst), Some(src)) => dst.extend(src),
            (None, Some(src)) => self.currencies = Some(src),
            _ => {}
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub defaults: Defaults,
    locales: BTreeMap<String, LocaleConventions>,
    currencies: BTreeMap<String, CurrencyInfo>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            locales: BTreeMap::new(),
            currencies: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load the standard layers plus an optional explicit file.
    ///
    /// The explicit file must exist; the standard layers may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut merged = ConfigToml::default();
        for path in standard_paths() {
            if let Some(layer) = read_layer(&path, false)? {
                merged.merge(layer);
            }
        }
        if let Some(path) = explicit {
            if let Some(layer) = read_layer(path, true)? {
                merged.merge(layer);
            }
        }
        Self::resolve(merged)
    }

    /// Load exactly the given files, in order; each must exist
    pub fn from_files(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut merged = ConfigToml::default();
        for path in paths {
            if let Some(layer) = read_layer(path, true)? {
                merged.merge(layer);
            }
        }
        Self::resolve(merged)
    }

    /// Parse a single TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: ConfigToml = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        Self::resolve(parsed)
    }

    /// The built-in locale table extended with configured locales and currencies.
    ///
    /// Fails when the table has no data for the default locale or currency.
    pub fn locale_table(&self) -> Result<LocaleTable, FormatError> {
        let mut table = LocaleTable::builtin();
        for (tag, conventions) in &self.locales {
            table = table.with_locale(tag, conventions.clone())?;
        }
        for (code, info) in &self.currencies {
            table = table.with_currency(code, info.clone())?;
        }
        table.resolve(&self.defaults.locale)?;
        table.currency(&self.defaults.currency)?;
        Ok(table)
    }

    fn resolve(raw: ConfigToml) -> Result<Self, ConfigError> {
        let mut defaults = Defaults::default();
        if let Some(currency) = raw.default_currency {
            defaults.currency = locale::normalize_currency(&currency)?;
        }
        if let Some(tag) = raw.default_locale {
            locale::normalize_locale(&tag)?;
            defaults.locale = tag;
        }
        if let Some(charset) = raw.default_charset {
            if charset.is_empty() {
                return Err(ConfigError::Invalid("default_charset must not be empty".into()));
            }
            defaults.charset = charset;
        }

        let locales = raw.locales.unwrap_or_default();
        for (tag, conventions) in &locales {
            locale::normalize_locale(tag)?;
            if conventions.decimal.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "locale {}: decimal separator must not be empty",
                    tag
                )));
            }
            for code in conventions.symbols.keys() {
                locale::normalize_currency(code)?;
            }
        }
        let currencies = raw.currencies.unwrap_or_default();
        for code in currencies.keys() {
            locale::normalize_currency(code)?;
        }

        Ok(Self {
            defaults,
            locales,
            currencies,
        })
    }
}

/// System and user config locations, lowest precedence first
pub fn standard_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("textkit").join("config.toml"));
    }
    paths
}

fn read_layer(path: &Path, required: bool) -> Result<Option<ConfigToml>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::debug!(path = %path.display(), "config layer not found, skipping");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let layer = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config layer");
    Ok(Some(layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::CurrencyFormatter;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.currency, "USD");
        assert_eq!(config.defaults.locale, "en-US");
        assert_eq!(config.defaults.charset.len(), 62);
    }

    #[test]
    fn test_parse_defaults() {
        let config = Config::from_toml_str(
            r#"
default_currency = "eur"
default_locale = "de-DE"
default_charset = "01"
"#,
        )
        .unwrap();
        assert_eq!(config.defaults.currency, "EUR");
        assert_eq!(config.defaults.locale, "de-DE");
        assert_eq!(config.defaults.charset, "01");
    }

    #[test]
    fn test_custom_locale_and_currency() {
        let config = Config::from_toml_str(
            r#"
[locales.en-NZ]
group = " "
decimal = "."

[currencies.NZD]
symbol = "NZ$"
"#,
        )
        .unwrap();
        let table = config.locale_table().unwrap();
        assert_eq!(table.format(1234.5, "NZD", "en-NZ").unwrap(), "NZ$1 234.50");
    }

    #[test]
    fn test_default_locale_needs_data() {
        let config = Config::from_toml_str("default_locale = \"sw-KE\"").unwrap();
        assert_eq!(
            config.locale_table().unwrap_err(),
            FormatError::UnsupportedLocale("sw-KE".to_string())
        );

        let config = Config::from_toml_str(
            r#"
default_locale = "sw-KE"

[locales.sw-KE]
group = ","
decimal = "."
"#,
        )
        .unwrap();
        assert!(config.locale_table().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Config::from_toml_str("default_charset = \"\""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml_str("default_currency = \"DOLLAR\""),
            Err(ConfigError::Format(FormatError::InvalidCurrency(_)))
        ));
        assert!(matches!(
            Config::from_toml_str("[currencies.X]\nsymbol = \"x\""),
            Err(ConfigError::Format(_))
        ));
        assert!(matches!(
            Config::from_toml_str("unknown_key = 1"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_layers_merge_in_order() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("base.toml");
        let user = dir.path().join("user.toml");
        std::fs::write(&base, "default_currency = \"GBP\"\ndefault_locale = \"en-GB\"\n").unwrap();
        std::fs::write(&user, "default_currency = \"JPY\"\n").unwrap();

        let config = Config::from_files(&[base, user]).unwrap();
        assert_eq!(config.defaults.currency, "JPY");
        assert_eq!(config.defaults.locale, "en-GB");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_standard_paths_start_with_system() {
        let paths = standard_paths();
        assert_eq!(paths[0], PathBuf::from(SYSTEM_CONFIG));
    }
}
