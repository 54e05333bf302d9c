// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Writes errors, hints, and informational notes to stderr with optional color

use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Centralized CLI output utilities for consistent formatting
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Create new CLI output utility with TTY detection
    pub fn new() -> Self {
        Self {
            use_color: std::io::stderr().is_terminal(),
        }
    }

    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn format_error(&self, message: &str) -> String {
        self.label("error:", message, |s| s.red().bold().to_string())
    }

    pub fn format_hint(&self, message: &str) -> String {
        self.label("hint:", message, |s| s.yellow().bold().to_string())
    }

    pub fn format_info(&self, message: &str) -> String {
        self.label("info:", message, |s| s.blue().bold().to_string())
    }

    /// Display an error message
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format_error(message));
    }

    /// Display a follow-up suggestion for the previous error
    pub fn hint(&self, message: &str) {
        eprintln!("{}", self.format_hint(message));
    }

    /// Display an informational message
    pub fn info(&self, message: &str) {
        eprintln!("{}", self.format_info(message));
    }

    fn label(&self, label: &str, message: &str, paint: impl Fn(&str) -> String) -> String {
        if self.use_color {
            format!("{} {}", paint(label), message)
        } else {
            format!("{} {}", label, message)
        }
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new()
    }
}
