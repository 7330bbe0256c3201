//! Colored terminal output for the textkit CLI
//!
//! Uses owo-colors for terminal colors.

use crate::helpers::FunctionInfo;
use owo_colors::OwoColorize;

/// Print an action header (blue, bold)
/// Example: "==> Running title.rhai"
pub fn action(message: &str) {
    println!("{} {}", "==>".blue().bold(), message.bold());
}

/// Print an info message (cyan)
pub fn info(message: &str) {
    println!("{} {}", "::".cyan(), message);
}

/// Print an error message (red)
pub fn error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message.red());
}

/// Print a result value, unadorned so it can be piped
pub fn value(rendered: &str) {
    println!("{}", rendered);
}

/// Print one function in list output
pub fn function_item(info: &FunctionInfo) {
    println!("  {:<22} {}", info.name.green(), info.usage.dimmed());
}
