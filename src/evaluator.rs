//! Password strength evaluator - main analysis logic.

use secrecy::{ExposeSecret, SecretString};

use crate::crack_time::{DEFAULT_CRACK_SPEED, estimate_crack_time, format_crack_speed};
use crate::entropy::{compute_entropy_bits, round_bits};
use crate::sections::evaluate_criteria;
use crate::types::{Strength, StrengthReport};

/// Maps the number of passed criteria to a classification.
///
/// 5 is Strong, 3 or 4 is Moderate, anything lower is Weak.
pub fn classify_strength(passed_count: usize) -> Strength {
    match passed_count {
        5.. => Strength::Strong,
        3 | 4 => Strength::Moderate,
        _ => Strength::Weak,
    }
}

/// Analyzes a password at the default crack speed of 1e9 guesses per second.
///
/// # Example
///
/// ```rust
/// use pwd_crack_sim::{analyze_strength, Strength};
/// use secrecy::SecretString;
///
/// let report = analyze_strength(&SecretString::new("Passw0rd!".to_string().into()));
/// assert_eq!(report.strength, Strength::Strong);
/// ```
pub fn analyze_strength(password: &SecretString) -> StrengthReport {
    analyze_strength_with_speed(password, DEFAULT_CRACK_SPEED)
}

/// Analyzes a password, projecting crack time at `crack_speed` guesses per second.
pub fn analyze_strength_with_speed(password: &SecretString, crack_speed: f64) -> StrengthReport {
    let pwd = password.expose_secret();

    let criteria = evaluate_criteria(password);
    let passed_count = criteria.passed_count();
    let strength = classify_strength(passed_count);

    // Crack time uses the unrounded estimate.
    let entropy_bits = compute_entropy_bits(pwd);
    let crack_time = estimate_crack_time(entropy_bits, crack_speed);

    let reversed: String = pwd.chars().rev().collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "strength analysis: {}/5 criteria, {}, {:.2} bits",
        passed_count,
        strength,
        entropy_bits
    );

    StrengthReport {
        criteria,
        passed_count,
        strength,
        entropy_bits: round_bits(entropy_bits),
        crack_time,
        crack_speed,
        crack_speed_readable: format_crack_speed(crack_speed),
        reversed: SecretString::new(reversed.into()),
    }
}
