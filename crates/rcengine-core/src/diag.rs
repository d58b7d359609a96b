//! Indented diagnostic lines for games to trace their own state.
//!
//! Output goes through the `log` facade at debug level, so it shows up
//! wherever the host application routes its logs.

const INDENT: &str = "    ";
const RULE_WIDTH: usize = 50;

/// Format `msg` as `| msg`, indented by `level` steps.
pub fn format_message(msg: &str, level: usize) -> String {
    format!("{}| {msg}", INDENT.repeat(level))
}

/// A horizontal rule indented by `level` steps.
pub fn format_rule(level: usize) -> String {
    format!("{}{}", INDENT.repeat(level), "-".repeat(RULE_WIDTH))
}

/// Log an indented message.
pub fn message(msg: &str, level: usize) {
    log::debug!("{}", format_message(msg, level));
}

/// Log an indented horizontal rule.
pub fn rule(level: usize) {
    log::debug!("{}", format_rule(level));
}
