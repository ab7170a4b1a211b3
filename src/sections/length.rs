//! Length section - checks password minimum length.

pub const MIN_LENGTH: usize = 8;

/// Passes when the password has at least [`MIN_LENGTH`] characters.
pub fn has_min_length(pwd: &str) -> bool {
    pwd.chars().count() >= MIN_LENGTH
}
