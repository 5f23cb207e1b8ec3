//! Status, warning and error messages for CLI mode, written to stderr.

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW, score_color};

fn paint(color: &str, msg: &str) -> String {
    if quiet::stderr_is_tty() {
        format!("{color}{msg}{RESET}")
    } else {
        msg.to_string()
    }
}

/// Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", paint(YELLOW, msg));
    }
}

/// Always shown.
pub fn error(msg: &str) {
    eprintln!("{}", paint(RED, msg));
}

/// Strength line for a generated password. Suppressed in quiet mode.
pub fn strength(label: &str, score: u8) {
    if !quiet::enabled() {
        eprintln!("Strength: {} ({score}/5)", paint(score_color(score), label));
    }
}

pub fn saved(count: usize, destination: &str) {
    if !quiet::enabled() {
        eprintln!("{count} password(s) \u{2192} {destination}");
    }
}

/// Clipboard unavailable. Passwords go to the remaining sinks, or are printed
/// when there are none.
pub fn clipboard_fallback(err: &str, remaining: &[String]) {
    warn(&clipboard_fallback_message(err, remaining));
}

fn clipboard_fallback_message(err: &str, remaining: &[String]) -> String {
    if remaining.is_empty() {
        format!("Clipboard unavailable ({err}); printing to terminal instead.")
    } else {
        format!(
            "Clipboard unavailable ({err}); saving to {} only.",
            remaining.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_names_the_remaining_destination() {
        let msg = clipboard_fallback_message("no display", &[]);
        assert!(msg.contains("printing to terminal"));

        let msg = clipboard_fallback_message("no display", &["out.txt".to_string()]);
        assert!(msg.contains("saving to out.txt only"));
        assert!(!msg.contains("printing to terminal"));
    }
}
