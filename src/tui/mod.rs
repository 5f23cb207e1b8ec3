//! Interactive prompt session.

mod input;
mod session;
mod text;

pub use input::*;
pub use session::*;
pub use text::*;

use crate::cli::quiet;
use crate::error::RunError;
use crate::pass::{AppendFile, Clipboard, Sink};
use crate::settings::Settings;
use crate::terminal::reset_terminal;

/// Run one interactive round, saving to the clipboard when requested and to
/// the settings' output file otherwise.
pub fn run(settings: &Settings) -> Result<Outcome, RunError> {
    let color = quiet::stdout_is_tty();
    if color {
        reset_terminal();
    }
    println!("{}", banner());

    let mut sink: Box<dyn Sink> = if settings.to_clipboard {
        match Clipboard::new() {
            Ok(c) => Box::new(c),
            Err(e) => {
                log::warn!("clipboard unavailable: {e}");
                Box::new(AppendFile::new(&settings.output_file_path))
            }
        }
    } else {
        Box::new(AppendFile::new(&settings.output_file_path))
    };

    let mut prompter = TerminalPrompter::new();
    let mut rng = rand::thread_rng();
    let mut stdout = std::io::stdout();
    run_session(&mut prompter, &mut rng, &mut stdout, sink.as_mut(), color)
}
