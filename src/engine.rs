//! Rhai engine with the text helpers registered
//!
//! Provides the execution environment for text scripts.

use crate::config::{Config, Defaults};
use crate::helpers::{self, FunctionInfo};
use crate::locale::{CurrencyFormatter, LocaleTable};
use anyhow::{Context, Result, bail};
use rhai::{Dynamic, Engine, Scope};
use std::path::Path;
use std::sync::Arc;

/// Script engine exposing the `text` module
pub struct TextEngine {
    engine: Engine,
    defaults: Defaults,
}

impl TextEngine {
    /// Engine with built-in locale data and default settings
    pub fn new() -> Self {
        Self::with_formatter(Defaults::default(), Arc::new(LocaleTable::builtin()))
    }

    /// Engine using the defaults and locale data from `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let table = config
            .locale_table()
            .context("Failed to build locale table from config")?;
        Ok(Self::with_formatter(config.defaults.clone(), Arc::new(table)))
    }

    /// Engine with a caller-supplied currency formatter
    pub fn with_formatter(defaults: Defaults, formatter: Arc<dyn CurrencyFormatter>) -> Self {
        let mut engine = Engine::new();

        engine.register_static_module("text", helpers::text_module(formatter, &defaults).into());

        // print shares the log channel, debug becomes a tracing event
        engine.register_fn("log", helpers::log::log);
        engine.register_fn("warn", helpers::log::warn);
        engine.on_print(helpers::log::log);
        engine.on_debug(|msg, source, pos| helpers::log::debug(msg, source, pos));

        Self { engine, defaults }
    }

    /// Evaluate a script and return its final value
    pub fn eval(&self, script: &str) -> Result<Dynamic> {
        self.engine
            .eval::<Dynamic>(script)
            .map_err(|e| anyhow::anyhow!("Failed to evaluate script: {}", e))
    }

    /// Evaluate a script file
    pub fn run_file(&self, path: &Path) -> Result<Dynamic> {
        let script = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "running script");
        self.engine
            .eval::<Dynamic>(&script)
            .map_err(|e| anyhow::anyhow!("Failed to run {}: {}", path.display(), e))
    }

    /// Call one `text` function by name with already-built arguments
    pub fn call(&self, name: &str, args: Vec<Dynamic>) -> Result<Dynamic> {
        let Some(info) = helpers::function(name) else {
            bail!("Unknown function: {}", name);
        };
        if args.len() < info.min_args || args.len() > info.max_args {
            bail!(
                "{} takes {} argument(s), got {}: {}",
                name,
                arity(info),
                args.len(),
                info.usage
            );
        }

        let mut scope = Scope::new();
        let mut params = Vec::with_capacity(args.len());
        for (i, arg) in args.into_iter().enumerate() {
            let param = format!("arg{}", i);
            scope.push_dynamic(param.clone(), arg);
            params.push(param);
        }

        let script = format!("text::{}({})", name, params.join(", "));
        self.engine
            .eval_with_scope::<Dynamic>(&mut scope, &script)
            .map_err(|e| anyhow::anyhow!("Failed to call {}: {}", name, e))
    }

    /// Every function in the `text` module
    pub fn functions(&self) -> &'static [FunctionInfo] {
        helpers::FUNCTIONS
    }

    /// Defaults applied to optional arguments
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn arity(info: &FunctionInfo) -> String {
    if info.min_args == info.max_args {
        info.min_args.to_string()
    } else {
        format!("{}..{}", info.min_args, info.max_args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::FormatError;
    use tempfile::TempDir;

    #[test]
    fn test_engine_creation() {
        let engine = TextEngine::new();
        assert_eq!(engine.defaults().currency, "USD");
        assert_eq!(engine.functions().len(), 21);
    }

    #[test]
    fn test_eval_module_call() {
        let engine = TextEngine::new();
        let result = engine.eval(r#"text::slugify("Hello World!")"#).unwrap();
        assert_eq!(result.into_string().unwrap(), "hello-world");
    }

    #[test]
    fn test_builtin_trim_is_not_shadowed() {
        let engine = TextEngine::new();
        let result = engine
            .eval(r#"let s = "  x  "; s.trim(); s + "|" + text::trim("  y  ")"#)
            .unwrap();
        assert_eq!(result.into_string().unwrap(), "x|y");
    }

    #[test]
    fn test_call_by_name() {
        let engine = TextEngine::new();
        let result = engine
            .call(
                "mask",
                vec![Dynamic::from("1234567890".to_string()), Dynamic::from_int(0), Dynamic::from_int(6)],
            )
            .unwrap();
        assert_eq!(result.into_string().unwrap(), "******7890");
    }

    #[test]
    fn test_call_rejects_unknown_and_bad_arity() {
        let engine = TextEngine::new();
        let err = engine.call("shout", vec![]).unwrap_err();
        assert!(err.to_string().contains("Unknown function"));

        let err = engine.call("truncate", vec![Dynamic::from("x".to_string())]).unwrap_err();
        assert!(err.to_string().contains("takes 2 argument(s)"));
    }

    #[test]
    fn test_run_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("title.rhai");
        std::fs::write(
            &path,
            r#"
            let title = "  the quick brown fox  ";
            text::to_title_case(text::trim(title))
        "#,
        )
        .unwrap();

        let engine = TextEngine::new();
        let result = engine.run_file(&path).unwrap();
        assert_eq!(result.into_string().unwrap(), "The Quick Brown Fox");
    }

    #[test]
    fn test_run_missing_file() {
        let engine = TextEngine::new();
        let err = engine.run_file(Path::new("/nonexistent/script.rhai")).unwrap_err();
        assert!(err.to_string().contains("Failed to read script"));
    }

    #[test]
    fn test_custom_formatter() {
        struct Plain;
        impl CurrencyFormatter for Plain {
            fn format(&self, value: f64, currency: &str, _locale: &str) -> Result<String, FormatError> {
                Ok(format!("{} {}", currency, value))
            }
        }

        let engine = TextEngine::with_formatter(Defaults::default(), Arc::new(Plain));
        let result = engine.eval("text::to_currency(5)").unwrap();
        assert_eq!(result.into_string().unwrap(), "USD 5");
    }

    #[test]
    fn test_config_defaults_apply() {
        let config = Config::from_toml_str("default_currency = \"EUR\"\ndefault_locale = \"de-DE\"").unwrap();
        let engine = TextEngine::from_config(&config).unwrap();
        let result = engine.eval("text::to_currency(1234.5)").unwrap();
        assert_eq!(result.into_string().unwrap(), "1.234,50\u{a0}€");
    }
}
