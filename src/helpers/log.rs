//! Script-side output
//!
//! `log` and Rhai's `print` write a script's own output to stdout, `warn`
//! writes to stderr. Every line of a message carries the tag so multi-line
//! values stay attributable when mixed with CLI output. Rhai's `debug` is not
//! printed at all; it becomes a tracing event, shown with `--verbose`.

use rhai::Position;

/// Print a script message to stdout
pub fn log(msg: &str) {
    println!("{}", tagged("textkit", msg));
}

/// Print a script warning to stderr
pub fn warn(msg: &str) {
    eprintln!("{}", tagged("textkit:warn", msg));
}

/// Handler for Rhai's `debug`
pub fn debug(msg: &str, source: Option<&str>, pos: Position) {
    tracing::debug!(source = source.unwrap_or("<script>"), position = %pos, "{}", msg);
}

fn tagged(tag: &str, msg: &str) -> String {
    if msg.is_empty() {
        return format!("[{}]", tag);
    }
    msg.lines()
        .map(|line| format!("[{}] {}", tag, line))
        .collect::<Vec<_>>()
        .join("\n")
}
