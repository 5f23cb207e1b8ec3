use std::io::{self, BufRead, Write};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use log::warn;

use crate::cli::quiet;
use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Source of answers for the interactive session.
pub trait Prompter {
    /// Show `prompt` and return the answer, or `None` when the user cancels
    /// or input has ended.
    fn ask(&mut self, prompt: &str) -> Option<String>;
}

/// Reads answers from the controlling terminal, or line by line from stdin
/// when stdin is not a terminal.
pub struct TerminalPrompter {
    raw: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            raw: quiet::is_interactive(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if self.raw {
            return get_editable_input(prompt, "");
        }

        print!("{prompt} ");
        flush();
        read_line(&mut io::stdin().lock())
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(e) => {
            warn!("failed to read answer: {e}");
            None
        }
    }
}

/// `y`/`yes` in any case is yes; anything else, including cancel, is no.
pub fn ask_yes_no<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str) -> bool {
    prompter
        .ask(&format!("{prompt} (y/n):"))
        .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
        .unwrap_or(false)
}

/// Ask for a length. `None` means the answer was not a valid length.
pub fn ask_length<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str) -> Option<usize> {
    prompter.ask(prompt)?.trim().parse().ok()
}

/// Single-line editor in raw mode. Esc or Ctrl+Q cancels, Ctrl+C exits.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let mut input: Vec<char> = initial_value.chars().collect();
    let mut cursor = input.len();
    let mut drawn_len = input.len();
    let mut cancelled = false;

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            warn!("raw mode unavailable: {e}");
            print!("{prompt} ");
            flush();
            return read_line(&mut io::stdin().lock());
        }
    };

    print!("{} {}", prompt, initial_value);
    flush();

    loop {
        let key_event = match read() {
            Ok(Event::Key(k)) if k.kind != KeyEventKind::Release => k,
            Ok(_) => continue,
            Err(_) => break,
        };
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyCode::Char('q') if ctrl => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => cursor = (cursor + 1).min(input.len()),
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let text: String = input.iter().collect();
        let mut out = io::stdout().lock();
        let _ = write!(out, "\r{} {}", prompt, " ".repeat(drawn_len + 1));
        let _ = write!(out, "\r{} {}", prompt, text);
        // 1-based column
        let _ = write!(out, "\x1b[{}G", prompt.chars().count() + 2 + cursor);
        let _ = out.flush();
        drawn_len = input.len();
    }

    drop(guard);
    println!();

    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}
