//! Entropy estimate from the character classes present in a password.
//!
//! The estimate assumes every position is drawn uniformly from the union of
//! the classes that appear, so it is an upper bound rather than the Shannon
//! entropy of the actual string. Class detection here is independent of the
//! criteria sections.

use crate::sections::{is_decimal_digit, is_special};

/// A recognized character class and the number of symbols it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn size(self) -> u32 {
        match self {
            CharClass::Lower => 26,
            CharClass::Upper => 26,
            CharClass::Digit => 10,
            CharClass::Special => 32,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Lower => c.is_ascii_lowercase(),
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::Digit => is_decimal_digit(c),
            CharClass::Special => is_special(c),
        }
    }
}

/// Size of the alphabet formed by the classes present in `password`.
pub fn alphabet_size(password: &str) -> u32 {
    CharClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| class.contains(c)))
        .map(CharClass::size)
        .sum()
}

/// `length * log2(N)`, or 0.0 for an empty password or one with no recognized class.
pub fn compute_entropy_bits(password: &str) -> f64 {
    let length = password.chars().count();
    if length == 0 {
        return 0.0;
    }
    let n = alphabet_size(password);
    if n == 0 {
        return 0.0;
    }
    length as f64 * f64::from(n).log2()
}

/// Rounds to two decimal places for display.
pub fn round_bits(bits: f64) -> f64 {
    (bits * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_empty() {
        assert_eq!(compute_entropy_bits(""), 0.0);
    }

    #[test]
    fn test_entropy_lowercase_only() {
        let bits = compute_entropy_bits("aaaa");
        assert!((bits - 4.0 * 26f64.log2()).abs() < 1e-9);
        assert_eq!(round_bits(bits), 18.8);
    }

    #[test]
    fn test_entropy_unrecognized_classes() {
        assert_eq!(alphabet_size("   ¿¿"), 0);
        assert_eq!(compute_entropy_bits("   ¿¿"), 0.0);
    }

    #[test]
    fn test_alphabet_size_all_classes() {
        assert_eq!(alphabet_size("aA1!"), 94);
        assert_eq!(alphabet_size("a1"), 36);
        assert_eq!(alphabet_size("Z!"), 58);
    }

    #[test]
    fn test_entropy_unicode_decimal_digit() {
        let pwd = "abc\u{0663}defgh";
        assert_eq!(alphabet_size(pwd), 36);
        assert_eq!(round_bits(compute_entropy_bits(pwd)), 46.53);
    }

    #[test]
    fn test_entropy_counts_unrecognized_characters_in_length() {
        // Spaces add length but no alphabet.
        let with_space = compute_entropy_bits("ab cd");
        assert!((with_space - 5.0 * 26f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_non_negative() {
        for pwd in ["", "a", "Passw0rd!", "🙂🙂", "ZZZZZZZZZZZZZZZZZZZZ"] {
            assert!(compute_entropy_bits(pwd) >= 0.0);
        }
    }
}
