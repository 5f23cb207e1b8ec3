//! One interactive generate-rate-save round.

use std::io::Write;

use log::{info, warn};
use rand::{CryptoRng, Rng};

use super::input::{Prompter, ask_length, ask_yes_no};
use crate::error::RunError;
use crate::pass::strength::{self, Strength};
use crate::pass::{GenerationConfig, GenerationError, Password, Sink, charset, generate};
use crate::terminal::{
    BOLD, RED, RESET, box_bottom, box_line, box_top, calculate_entropy, score_color, style,
};

/// Used when the length answer is not a number.
pub const DEFAULT_LENGTH: usize = 12;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Saved,
    Declined,
    Rejected(GenerationError),
}

/// Collect a configuration from the prompter. Invalid lengths fall back to
/// [`DEFAULT_LENGTH`] with a notice written to `out`. Escape codes are only
/// written when `color` is set.
pub fn collect_config<P, W>(
    prompter: &mut P,
    out: &mut W,
    color: bool,
) -> Result<GenerationConfig, RunError>
where
    P: Prompter + ?Sized,
    W: Write,
{
    let length = match ask_length(prompter, "Enter password length (recommended ≥ 12):") {
        Some(len) => len,
        None => {
            warn!("invalid length answer, using {DEFAULT_LENGTH}");
            writeln!(
                out,
                "{}Invalid length. Using default ({DEFAULT_LENGTH}).{}",
                style(color, RED),
                style(color, RESET)
            )?;
            DEFAULT_LENGTH
        }
    };

    Ok(GenerationConfig {
        length,
        include_upper: ask_yes_no(prompter, "Include uppercase letters?"),
        include_lower: ask_yes_no(prompter, "Include lowercase letters?"),
        include_digits: ask_yes_no(prompter, "Include digits?"),
        include_special: ask_yes_no(prompter, "Include special characters?"),
        exclude_lookalikes: ask_yes_no(
            prompter,
            "Exclude similar-looking characters (O, 0, I, l, 1, |)?",
        ),
    })
}

/// Prompt for a configuration, generate one password, show its strength and
/// optionally hand it to `sink`. A generator error is shown and returned as
/// [`Outcome::Rejected`]; nothing is scored or saved in that case.
pub fn run_session<P, R, W>(
    prompter: &mut P,
    rng: &mut R,
    out: &mut W,
    sink: &mut dyn Sink,
    color: bool,
) -> Result<Outcome, RunError>
where
    P: Prompter + ?Sized,
    R: Rng + CryptoRng + ?Sized,
    W: Write,
{
    let config = collect_config(prompter, out, color)?;

    let password = match generate(&config, rng) {
        Ok(p) => p,
        Err(e) => {
            info!("generation rejected: {e}");
            writeln!(out, "{}Error: {e}{}", style(color, RED), style(color, RESET))?;
            return Ok(Outcome::Rejected(e));
        }
    };

    let rating = strength::score(password.as_str());
    write_result(out, &password, &rating, charset::size(&config), color)?;

    let question = format!("Do you want to save this password to {}?", sink.destination());
    if !ask_yes_no(prompter, &question) {
        return Ok(Outcome::Declined);
    }

    sink.save(&password).map_err(|source| RunError::Save {
        destination: sink.destination(),
        source,
    })?;
    writeln!(out, "Password saved to '{}'", sink.destination())?;
    Ok(Outcome::Saved)
}

fn write_result<W: Write>(
    out: &mut W,
    password: &Password,
    rating: &Strength,
    charset_size: usize,
    color: bool,
) -> std::io::Result<()> {
    let score = rating.score();
    let entropy = calculate_entropy(password.len(), charset_size);
    let reset = style(color, RESET);

    writeln!(out)?;
    writeln!(out, "{}", box_top("Generated Password"))?;
    writeln!(out, "{}", box_line(&format!("{}{password}{reset}", style(color, BOLD))))?;
    writeln!(out, "{}", box_bottom())?;
    writeln!(out, "{}", box_top("Strength"))?;
    writeln!(
        out,
        "{}",
        box_line(&format!(
            "{}{}{reset} ({score}/5) • {entropy:.1} bits",
            style(color, score_color(score)),
            rating.label()
        ))
    )?;
    writeln!(out, "{}", box_bottom())?;
    Ok(())
}
