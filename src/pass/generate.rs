//! Password generation.

use std::fmt;

use log::debug;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::GenerationError;
use super::charset::{self, CharClass};

/// Longest password `generate` will build.
pub const MAX_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub exclude_lookalikes: bool,
}

impl GenerationConfig {
    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.include_upper,
            CharClass::Lower => self.include_lower,
            CharClass::Digit => self.include_digits,
            CharClass::Special => self.include_special,
        }
    }

    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|&class| self.includes(class))
            .collect()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_special: true,
            exclude_lookalikes: false,
        }
    }
}

/// A generated password. Memory is zeroed on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate one password satisfying `config`, drawing from `rng`.
///
/// One character is drawn from each enabled class, the rest are drawn with
/// replacement from the working alphabet, then the whole sequence is shuffled.
pub fn generate<R>(config: &GenerationConfig, rng: &mut R) -> Result<Password, GenerationError>
where
    R: Rng + CryptoRng + ?Sized,
{
    let classes = config.enabled_classes();
    if classes.is_empty() {
        return Err(GenerationError::NoClassSelected);
    }

    let mut pool = charset::build(config);
    if pool.is_empty() {
        return Err(GenerationError::EmptyAlphabet);
    }

    if config.length > MAX_LENGTH {
        pool.zeroize();
        return Err(GenerationError::LengthTooLong {
            requested: config.length,
            max: MAX_LENGTH,
        });
    }

    let mut chars: Vec<char> = Vec::with_capacity(config.length.max(classes.len()));
    for &class in &classes {
        let mut alphabet = charset::class_alphabet(class, config.exclude_lookalikes);
        if let Some(&c) = alphabet.choose(rng) {
            chars.push(c);
        }
        alphabet.zeroize();
    }

    let required = chars.len();
    let Some(remaining) = config.length.checked_sub(required) else {
        chars.zeroize();
        pool.zeroize();
        return Err(GenerationError::LengthTooShort {
            requested: config.length,
            required,
        });
    };

    chars.extend((0..remaining).map(|_| pool[rng.gen_range(0..pool.len())]));
    chars.shuffle(rng);

    debug!(
        "generated {} chars ({} mandatory from {}) from a {}-char alphabet",
        chars.len(),
        required,
        classes.iter().map(|c| c.name()).collect::<Vec<_>>().join(", "),
        pool.len()
    );

    let password = Password(chars.iter().collect());
    chars.zeroize();
    pool.zeroize();
    Ok(password)
}
