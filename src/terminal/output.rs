//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, entropy display.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and reset colors.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

/// `code` when `enabled`, otherwise nothing.
pub fn style(enabled: bool, code: &'static str) -> &'static str {
    if enabled { code } else { "" }
}

/// Color for a 0-5 strength score.
pub fn score_color(score: u8) -> &'static str {
    match score {
        0..=2 => RED,
        3 => YELLOW,
        _ => GREEN,
    }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │          content          │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Help option row with flag and description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    let mut out = format!(
        "│ {}{}{} │",
        flag_padded,
        first,
        " ".repeat(desc_col.saturating_sub(first.len()))
    );

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        out.push('\n');
        out.push_str(&format!(
            "│ {}{}{} │",
            indent,
            line,
            " ".repeat(desc_col.saturating_sub(line.len()))
        ));
    }
    out
}

/// Display width, ignoring ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Password entropy in bits for a uniformly drawn password.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_rows_have_fixed_width() {
        assert_eq!(box_top("").chars().count(), BOX_WIDTH);
        assert_eq!(box_top("Password").chars().count(), BOX_WIDTH);
        assert_eq!(box_bottom().chars().count(), BOX_WIDTH);
        assert_eq!(box_line("abc").chars().count(), BOX_WIDTH);
        assert_eq!(box_line_center("abc").chars().count(), BOX_WIDTH);
    }

    #[test]
    fn colored_content_keeps_width() {
        let colored = format!("{GREEN}Very Strong{RESET}");
        assert_eq!(console_width(&colored), "Very Strong".len());
        let line = box_line(&colored);
        assert_eq!(console_width(&line), BOX_WIDTH);
    }

    #[test]
    fn long_descriptions_wrap() {
        let opt = box_opt(
            "  -o, --output [PATH]",
            "Append every generated password to PATH, creating the file when it does not exist yet",
        );
        let rows: Vec<_> = opt.lines().collect();
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|r| r.chars().count() == BOX_WIDTH));
    }

    #[test]
    fn style_is_empty_when_disabled() {
        assert_eq!(style(true, RED), RED);
        assert_eq!(style(false, RED), "");
    }

    #[test]
    fn entropy_bits() {
        assert_eq!(calculate_entropy(10, 0), 0.0);
        assert!((calculate_entropy(12, 94) - 78.66).abs() < 0.01);
        assert_eq!(calculate_entropy(8, 2), 8.0);
    }
}
