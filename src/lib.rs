//! Pure text helpers with a Rhai scripting front end
//!
//! Every helper is a function of its inputs: no I/O, no shared state apart
//! from the random generator behind `random`. Helpers take any value and
//! hand non-string input back unchanged instead of failing.
//!
//! # Example Script
//!
//! ```rhai
//! let title = "  Rust 2024: What's New?  ";
//! let slug = text::slugify(title);                 // "rust-2024-whats-new"
//! let card = text::mask("4111111111111111", 0, 12); // "************1111"
//! let price = text::to_currency(1234.5, "EUR", "de-DE");
//! log(`${slug} ${card} ${price}`);
//! ```
//!
//! # Layers
//!
//! - [`text`] - typed functions over `&str`
//! - [`helpers`] - the same functions over script values, and the `text` module
//! - [`locale`] - currency formatting conventions
//! - [`TextEngine`] - a Rhai engine with the `text` module registered
//!
//! # Configuration
//!
//! [`Config`] merges `/etc/textkit/config.toml`, the user config file and an
//! optional explicit file. It supplies the default currency, locale and
//! charset, and may add locales and currencies to the built-in table.

pub mod config;
mod engine;
pub mod helpers;
pub mod locale;
pub mod output;
pub mod text;

pub use config::{Config, ConfigError, Defaults};
pub use engine::TextEngine;
pub use locale::{CurrencyFormatter, FormatError, LocaleTable};
pub use rhai::Dynamic;
