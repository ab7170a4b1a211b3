//! Brute-force crack time projection.

/// Default attacker speed: one billion guesses per second.
pub const DEFAULT_CRACK_SPEED: f64 = 1e9;

/// Reported when the crack speed is not a positive number.
pub const NOT_APPLICABLE: &str = "N/A";

/// Reported when the projected duration exceeds the `f64` range.
pub const UNBOUNDED: &str = "effectively forever";

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// Seconds needed to try all `2^entropy_bits` combinations at `crack_speed`.
///
/// Returns `None` when `crack_speed` is not strictly positive. The result may
/// be infinite for very high entropy.
pub fn estimate_crack_seconds(entropy_bits: f64, crack_speed: f64) -> Option<f64> {
    if !(crack_speed > 0.0) {
        return None;
    }
    let combinations = entropy_bits.exp2();
    Some(combinations / crack_speed)
}

/// Formats a duration in seconds using the largest unit it reaches.
///
/// Each bound is inclusive below: exactly 60 seconds is "1.0 minutes".
pub fn format_crack_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return UNBOUNDED.to_string();
    }
    if seconds < MINUTE {
        return format!("{:.2} seconds", seconds);
    }
    if seconds < HOUR {
        return format!("{:.1} minutes", seconds / MINUTE);
    }
    if seconds < DAY {
        return format!("{:.1} hours", seconds / HOUR);
    }
    if seconds < YEAR {
        return format!("{:.1} days", seconds / DAY);
    }
    format!("{:.1} years", seconds / YEAR)
}

/// Readable crack time for the given entropy and speed.
pub fn estimate_crack_time(entropy_bits: f64, crack_speed: f64) -> String {
    match estimate_crack_seconds(entropy_bits, crack_speed) {
        Some(seconds) => format_crack_time(seconds),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// Speed expressed in billions of guesses per second, e.g. `1.0 Billion / second`.
///
/// Whole numbers keep a trailing `.0`.
pub fn format_crack_speed(crack_speed: f64) -> String {
    format!("{:?} Billion / second", crack_speed / 1e9)
}
