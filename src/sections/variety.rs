//! Character variety section - digits, uppercase, lowercase and special characters.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Characters counted as "special".
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+=-{}[]:;\"'<,>.?/`~";

/// True for characters in [`SPECIAL_CHARACTERS`].
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// True for any Unicode decimal digit (category Nd), not only `0-9`.
pub fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Passes when the password contains a decimal digit.
pub fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(is_decimal_digit)
}

/// Passes when the password contains an ASCII uppercase letter.
pub fn has_upper(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

/// Passes when the password contains an ASCII lowercase letter.
pub fn has_lower(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

/// Passes when the password contains a special character.
pub fn has_special(pwd: &str) -> bool {
    pwd.chars().any(is_special)
}
