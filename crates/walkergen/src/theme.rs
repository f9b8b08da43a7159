//! Color theme for consistent output

use colored::*;

/// Color for success messages
pub fn success(msg: &str) -> ColoredString {
    msg.green()
}

/// Color for warning messages
pub fn warning(msg: &str) -> ColoredString {
    msg.yellow()
}

/// Color for info messages
pub fn info(msg: &str) -> ColoredString {
    msg.cyan()
}

/// Color for attribute indices
pub fn index(idx: usize) -> ColoredString {
    format!("{:>3}", idx).bold()
}

/// Color for attribute kinds: primitives stand out from references
pub fn kind_badge(kind: &str) -> ColoredString {
    let padded = format!("{:<9}", kind);
    match kind {
        "reference" => padded.blue(),
        _ => padded.magenta(),
    }
}

/// Symbol for success
pub fn success_symbol() -> &'static str {
    "✓"
}

/// Symbol for error
pub fn error_symbol() -> &'static str {
    "✗"
}

/// Symbol for pending actions
pub fn arrow_symbol() -> &'static str {
    "→"
}
