//! textkit CLI - text helpers from the shell
//!
//! Usage:
//!   textkit apply <function> <text> [args...]   Apply one helper
//!   textkit run <script>                        Run a Rhai script
//!   textkit list                                List available helpers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use textkit::{Config, Dynamic, TextEngine, output};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "textkit")]
#[command(about = "Text transformation helpers backed by Rhai scripts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Extra config file, applied over the system and user layers
    #[arg(short, long, global = true, env = "TEXTKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply one helper to a piece of text
    Apply {
        /// Helper name, e.g. slugify
        function: String,

        /// Input text, or - to read stdin
        text: String,

        /// Remaining arguments; numbers and booleans are parsed as such
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run a Rhai script and print its final value
    Run {
        /// Path to the script
        script: PathBuf,
    },

    /// List available helpers
    List,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "textkit=debug" } else { "textkit=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => {
            let functions = TextEngine::new().functions();
            output::action("Available helpers");
            for info in functions {
                output::function_item(info);
            }
            output::info(&format!("{} helpers, call as text::<name>(...) in scripts", functions.len()));
        }

        Commands::Apply {
            function,
            text,
            args,
        } => {
            let engine = create_engine(cli.config.as_deref())?;
            let text = if text == "-" { read_stdin()? } else { text };

            let mut values = vec![Dynamic::from(text)];
            values.extend(args.iter().map(|a| parse_arg(a)));
            let result = engine.call(&function, values)?;
            print_value(&result, cli.json)?;
        }

        Commands::Run { script } => {
            let engine = create_engine(cli.config.as_deref())?;
            let result = engine.run_file(&script)?;
            if !result.is_unit() {
                print_value(&result, cli.json)?;
            }
        }
    }

    Ok(())
}

fn create_engine(config: Option<&std::path::Path>) -> Result<TextEngine> {
    let config = Config::load(config).context("Failed to load configuration")?;
    TextEngine::from_config(&config)
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    // a single trailing newline comes from the shell, not the text
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

/// Integers, then floats, then booleans; anything else stays a string
fn parse_arg(arg: &str) -> Dynamic {
    if let Ok(n) = arg.parse::<i64>() {
        return Dynamic::from_int(n);
    }
    // "inf" and "NaN" parse as floats but are meant as words
    if arg.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(f) = arg.parse::<f64>() {
            return Dynamic::from_float(f);
        }
    }
    match arg {
        "true" => Dynamic::from_bool(true),
        "false" => Dynamic::from_bool(false),
        _ => Dynamic::from(arg.to_string()),
    }
}

fn print_value(value: &Dynamic, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string(value).context("Failed to serialize result")?;
        output::value(&rendered);
    } else {
        output::value(&value.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arg() {
        assert_eq!(parse_arg("3").as_int().unwrap(), 3);
        assert_eq!(parse_arg("-2").as_int().unwrap(), -2);
        assert_eq!(parse_arg("2.5").as_float().unwrap(), 2.5);
        assert!(parse_arg("true").as_bool().unwrap());
        assert_eq!(parse_arg("EUR").into_string().unwrap(), "EUR");
        assert_eq!(parse_arg("NaN").into_string().unwrap(), "NaN");
    }

    #[test]
    fn test_cli_parses_apply() {
        let cli = Cli::try_parse_from(["textkit", "apply", "mask", "secret", "0", "-1"]).unwrap();
        match cli.command {
            Commands::Apply { function, args, .. } => {
                assert_eq!(function, "mask");
                assert_eq!(args, vec!["0", "-1"]);
            }
            _ => panic!("expected apply"),
        }
    }
}
