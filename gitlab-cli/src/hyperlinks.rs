// ABOUTME: Terminal hyperlink negotiation for rendered issue references
// ABOUTME: Combines the forced env signal, the configured preference, and TTY detection once per run

use crate::constants::{env, ui};

/// How hyperlinks should be emitted before the output stream is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyperlinkMode {
    Always,
    Auto,
    Never,
}

impl HyperlinkMode {
    /// A forced signal wins unconditionally; otherwise `display_hyperlinks = true`
    /// means "only on a terminal" and anything else means never.
    pub fn resolve(forced_signal: Option<&str>, persisted_preference: Option<bool>) -> Self {
        if is_forced(forced_signal) {
            HyperlinkMode::Always
        } else if persisted_preference == Some(true) {
            HyperlinkMode::Auto
        } else {
            HyperlinkMode::Never
        }
    }

    pub fn should_emit(&self, is_interactive_output: bool) -> bool {
        match self {
            HyperlinkMode::Always => true,
            HyperlinkMode::Auto => is_interactive_output,
            HyperlinkMode::Never => false,
        }
    }
}

/// The hyperlink decision for one invocation.
pub fn decide(
    forced_signal: Option<&str>,
    persisted_preference: Option<bool>,
    is_interactive_output: bool,
) -> bool {
    HyperlinkMode::resolve(forced_signal, persisted_preference).should_emit(is_interactive_output)
}

/// `FORCE_HYPERLINKS` counts as present unless it is empty or "0".
pub fn is_forced(signal: Option<&str>) -> bool {
    matches!(signal, Some(value) if !value.is_empty() && value != "0")
}

/// Reads the forced signal from the process environment.
pub fn forced_signal_from_env() -> Option<String> {
    std::env::var(env::FORCE_HYPERLINKS).ok()
}

/// Wraps `text` in an OSC 8 hyperlink to `url`.
pub fn hyperlink(text: &str, url: &str) -> String {
    format!(
        "{open}{url}{st}{text}{open}{st}",
        open = ui::OSC8_OPEN,
        st = ui::OSC8_TERMINATOR,
    )
}
