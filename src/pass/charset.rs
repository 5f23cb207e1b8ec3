//! Character classes and the alphabets built from them.

use super::GenerationConfig;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Characters that are easy to confuse with one another in common fonts.
pub const LOOKALIKES: &str = "O0Il1|";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    /// Every class, in the order mandatory characters are drawn.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digit => "digits",
            CharClass::Special => "special",
        }
    }

    /// Literal membership test against the class alphabet.
    #[inline]
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

#[inline]
pub fn is_lookalike(c: char) -> bool {
    LOOKALIKES.contains(c)
}

/// Alphabet of a single class, with look-alikes removed when requested.
pub fn class_alphabet(class: CharClass, exclude_lookalikes: bool) -> Vec<char> {
    class
        .alphabet()
        .chars()
        .filter(|&c| !(exclude_lookalikes && is_lookalike(c)))
        .collect()
}

/// Build the working alphabet: union of every enabled class after exclusion.
pub fn build(config: &GenerationConfig) -> Vec<char> {
    config
        .enabled_classes()
        .into_iter()
        .flat_map(|class| class_alphabet(class, config.exclude_lookalikes))
        .collect()
}

/// Size of the working alphabet (for entropy calculation).
pub fn size(config: &GenerationConfig) -> usize {
    build(config).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SPECIAL.len(), 32);
    }

    #[test]
    fn special_set_is_ascii_punctuation() {
        assert!(SPECIAL.chars().all(|c| c.is_ascii_punctuation()));
        let punctuation = (0u8..128)
            .map(char::from)
            .filter(char::is_ascii_punctuation)
            .count();
        assert_eq!(SPECIAL.len(), punctuation);
    }

    #[test]
    fn exclusion_strips_lookalikes_per_class() {
        assert_eq!(class_alphabet(CharClass::Upper, true).len(), 24);
        assert_eq!(class_alphabet(CharClass::Lower, true).len(), 25);
        assert_eq!(class_alphabet(CharClass::Digit, true).len(), 8);
        assert_eq!(class_alphabet(CharClass::Special, true).len(), 31);
        assert_eq!(class_alphabet(CharClass::Digit, false).len(), 10);
    }

    #[test]
    fn working_alphabet_unions_enabled_classes() {
        let config = GenerationConfig {
            include_upper: false,
            include_special: false,
            ..Default::default()
        };
        let chars = build(&config);
        assert_eq!(chars.len(), 36);
        assert!(chars.iter().all(|&c| CharClass::Lower.contains(c) || CharClass::Digit.contains(c)));

        let excluded = GenerationConfig {
            exclude_lookalikes: true,
            ..Default::default()
        };
        assert_eq!(size(&excluded), 94 - LOOKALIKES.len());
    }

    #[test]
    fn membership_is_literal() {
        assert!(CharClass::Upper.contains('Q'));
        assert!(!CharClass::Upper.contains('É'));
        assert!(!CharClass::Digit.contains('٣'));
        assert!(CharClass::Special.contains('|'));
        assert!(!CharClass::Special.contains(' '));
    }
}
