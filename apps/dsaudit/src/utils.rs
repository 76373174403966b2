//! Terminal helpers shared by the binary and printers.

use owo_colors::OwoColorize;

/// Colors are off for JSON output and when `NO_COLOR` is set.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors("human") {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if use_colors("human") {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn mark(ok: bool, color: bool) -> String {
    match (ok, color) {
        (true, true) => "✓".green().to_string(),
        (false, true) => "✗".red().to_string(),
        (true, false) => "✓".to_string(),
        (false, false) => "✗".to_string(),
    }
}
