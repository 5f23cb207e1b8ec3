//! CLI context: flags, settings and the output sinks they select.

use std::io::{self, Write};
use std::process::ExitCode;

use log::{debug, warn};

use super::{CliFlags, parse, prompts, quiet};
use crate::error::RunError;
use crate::pass::strength;
use crate::pass::{AppendFile, Clipboard, Sink, generate};
use crate::settings::Settings;
use crate::tui::{self, Outcome, print_help};

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, RunError> {
        let flags = parse(args)?;
        let settings = settings_from(&flags);
        Ok(Self { settings, flags })
    }

    /// A rejected interactive round has already been reported, so it maps to
    /// a failing exit code rather than an error.
    pub fn run(&mut self) -> Result<ExitCode, RunError> {
        quiet::set(self.flags.quiet);

        if self.flags.help {
            print_help();
            return Ok(ExitCode::SUCCESS);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Ok(ExitCode::SUCCESS);
        }
        if let Some(text) = &self.flags.rate {
            let rating = strength::score(text);
            println!("{} ({}/5)", rating.label(), rating.score());
            return Ok(ExitCode::SUCCESS);
        }
        if self.flags.interactive {
            if self.flags.has_generation_args() {
                prompts::warn("Generation flags are ignored in interactive mode.");
            }
            return Ok(match tui::run(&self.settings)? {
                Outcome::Rejected(_) => ExitCode::FAILURE,
                Outcome::Saved | Outcome::Declined => ExitCode::SUCCESS,
            });
        }

        let mut sinks = self.open_sinks();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let count = generate_output(&self.settings, &mut sinks, &mut out)?;

        for sink in &sinks {
            prompts::saved(count, &sink.destination());
        }
        Ok(ExitCode::SUCCESS)
    }

    fn open_sinks(&self) -> Vec<Box<dyn Sink>> {
        let mut sinks: Vec<Box<dyn Sink>> = Vec::new();
        if self.settings.output_to_file {
            sinks.push(Box::new(AppendFile::new(&self.settings.output_file_path)));
        }
        if self.settings.to_clipboard {
            match Clipboard::new() {
                Ok(c) => sinks.push(Box::new(c)),
                Err(e) => {
                    warn!("clipboard unavailable: {e}");
                    let remaining: Vec<String> = sinks.iter().map(|s| s.destination()).collect();
                    prompts::clipboard_fallback(&e.to_string(), &remaining);
                }
            }
        }
        sinks
    }
}

/// Map flags onto default settings.
pub fn settings_from(flags: &CliFlags) -> Settings {
    let mut settings = Settings::default();
    let generation = &mut settings.generation;

    if let Some(len) = flags.length {
        generation.length = len;
    }
    generation.include_upper = !flags.no_upper;
    generation.include_lower = !flags.no_lower;
    generation.include_digits = !flags.no_digits;
    generation.include_special = !flags.no_special;
    generation.exclude_lookalikes = flags.exclude_similar;

    if let Some(n) = flags.number {
        settings.number_of_passwords = n;
    }
    if let Some(path) = &flags.output {
        settings.output_to_file = true;
        if !path.is_empty() {
            settings.output_file_path = path.into();
        }
    }
    settings.to_clipboard = flags.clipboard;
    settings
}

/// Generate `settings.number_of_passwords` passwords. Each one goes to every
/// sink, or to `out` when there are no sinks. Returns how many were made.
pub fn generate_output<W: Write>(
    settings: &Settings,
    sinks: &mut [Box<dyn Sink>],
    out: &mut W,
) -> Result<usize, RunError> {
    let mut rng = rand::thread_rng();
    debug!(
        "generating {} password(s) with {:?}",
        settings.number_of_passwords, settings.generation
    );

    for _ in 0..settings.number_of_passwords {
        let password = generate(&settings.generation, &mut rng)?;

        if sinks.is_empty() {
            writeln!(out, "{password}")?;
        }
        for sink in sinks.iter_mut() {
            sink.save(&password).map_err(|source| RunError::Save {
                destination: sink.destination(),
                source,
            })?;
        }

        let rating = strength::score(password.as_str());
        prompts::strength(rating.label(), rating.score());
    }
    Ok(settings.number_of_passwords)
}
