//! Qualitative strength rating.

use super::charset::CharClass;

/// Minimum length that counts towards the score.
pub const STRONG_LENGTH: usize = 12;

/// Results of the five independent checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Criteria {
    pub long_enough: bool,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl Criteria {
    pub fn count(&self) -> u8 {
        [
            self.long_enough,
            self.has_lower,
            self.has_upper,
            self.has_digit,
            self.has_special,
        ]
        .into_iter()
        .filter(|&b| b)
        .count() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub criteria: Criteria,
}

impl Strength {
    /// 0 to 5.
    pub fn score(&self) -> u8 {
        self.criteria.count()
    }

    pub fn label(&self) -> &'static str {
        label_for(self.score())
    }
}

pub fn label_for(score: u8) -> &'static str {
    match score {
        1 => "Very Weak",
        2 => "Weak",
        3 => "Moderate",
        4 => "Strong",
        5 => "Very Strong",
        _ => "Unknown",
    }
}

/// Score any string. Never fails, including on empty input.
pub fn score(password: &str) -> Strength {
    let has = |class: CharClass| password.chars().any(|c| class.contains(c));
    Strength {
        criteria: Criteria {
            long_enough: password.chars().count() >= STRONG_LENGTH,
            has_lower: has(CharClass::Lower),
            has_upper: has(CharClass::Upper),
            has_digit: has(CharClass::Digit),
            has_special: has(CharClass::Special),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_lowercase_is_weak() {
        let s = score("aaaaaaaaaaaa");
        assert_eq!(s.score(), 2);
        assert_eq!(s.label(), "Weak");
        assert!(s.criteria.long_enough && s.criteria.has_lower);
    }

    #[test]
    fn all_criteria_is_very_strong() {
        let s = score("Abcdefgh1234!");
        assert_eq!(s.score(), 5);
        assert_eq!(s.label(), "Very Strong");
    }

    #[test]
    fn short_uppercase_is_very_weak() {
        let s = score("QWER");
        assert_eq!(s.score(), 1);
        assert_eq!(s.label(), "Very Weak");
    }

    #[test]
    fn empty_and_unclassified_input_is_unknown() {
        assert_eq!(score("").score(), 0);
        assert_eq!(score("").label(), "Unknown");
        assert_eq!(score("   éü").label(), "Unknown");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 12 chars, 24 bytes
        let s = score("éééééééééééé");
        assert!(s.criteria.long_enough);
        assert!(!s.criteria.has_lower);
        assert!(!score("ééééééé").criteria.long_enough);
    }

    #[test]
    fn eleven_chars_is_not_long_enough() {
        assert!(!score("Abcdefgh12!").criteria.long_enough);
        assert_eq!(score("Abcdefgh12!").label(), "Strong");
    }

    #[test]
    fn label_mapping_is_total() {
        let labels: Vec<_> = (0..=5).map(label_for).collect();
        assert_eq!(
            labels,
            ["Unknown", "Very Weak", "Weak", "Moderate", "Strong", "Very Strong"]
        );
        assert_eq!(label_for(6), "Unknown");
        assert_eq!(label_for(u8::MAX), "Unknown");
    }

    #[test]
    fn scoring_is_deterministic() {
        for input in ["", "aaaaaaaaaaaa", "x|Y8~", "Correct-Horse-Battery-9"] {
            assert_eq!(score(input), score(input));
        }
    }

    #[test]
    fn generated_full_config_is_very_strong() {
        use crate::pass::{GenerationConfig, generate};
        use rand::SeedableRng;
        use rand_chacha::ChaCha20Rng;

        let mut rng = ChaCha20Rng::seed_from_u64(9);
        for _ in 0..20 {
            let pass = generate(&GenerationConfig::default(), &mut rng).unwrap();
            assert_eq!(pass.len(), 12);
            assert_eq!(score(pass.as_str()).label(), "Very Strong");
        }
    }
}
