//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Raw mode stays on for as long as this guard lives.
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    /// Enable raw mode. A guard created while raw mode is already on
    /// leaves it on when dropped.
    pub fn new() -> io::Result<Self> {
        let already = is_raw_mode_enabled().unwrap_or(false);
        if !already {
            enable_raw_mode()?;
        }
        Ok(Self { restore: !already })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.restore {
            let _ = disable_raw_mode();
        }
    }
}
