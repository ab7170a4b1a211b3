//! Environment-driven settings and caller-side input defaults.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::crack_time::DEFAULT_CRACK_SPEED;

pub const STORE_PATH_VAR: &str = "PWD_SIM_STORE_PATH";
pub const CRACK_SPEED_VAR: &str = "PWD_SIM_CRACK_SPEED";
pub const DEFAULT_STORE_PATH: &str = "./password.txt";

/// Pause between probes when the caller gives none or an invalid one.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive number, got {value:?}")]
    InvalidCrackSpeed { var: &'static str, value: String },
}

/// Returns the candidate store path.
///
/// Priority:
/// 1. Environment variable `PWD_SIM_STORE_PATH`
/// 2. Default path `./password.txt`
pub fn store_path() -> PathBuf {
    std::env::var(STORE_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH))
}

/// Returns the crack speed from `PWD_SIM_CRACK_SPEED`, or 1e9 when unset.
pub fn crack_speed() -> Result<f64, ConfigError> {
    let Ok(raw) = std::env::var(CRACK_SPEED_VAR) else {
        return Ok(DEFAULT_CRACK_SPEED);
    };
    let parsed = raw.trim().parse::<f64>();
    match parsed {
        Ok(speed) if speed.is_finite() && speed > 0.0 => Ok(speed),
        _ => Err(ConfigError::InvalidCrackSpeed {
            var: CRACK_SPEED_VAR,
            value: raw,
        }),
    }
}

/// Parses a delay in seconds as supplied by a form field or CLI argument.
///
/// Falls back to [`DEFAULT_DELAY`] when the input is not a number, is
/// negative, or is not finite.
pub fn parse_delay(input: &str) -> Duration {
    match input.trim().parse::<f64>() {
        Ok(secs) if secs >= 0.0 => Duration::try_from_secs_f64(secs).unwrap_or(DEFAULT_DELAY),
        _ => DEFAULT_DELAY,
    }
}

/// Settings gathered from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub store_path: PathBuf,
    pub crack_speed: f64,
    pub delay: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            crack_speed: DEFAULT_CRACK_SPEED,
            delay: DEFAULT_DELAY,
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            store_path: store_path(),
            crack_speed: crack_speed()?,
            delay: DEFAULT_DELAY,
        })
    }
}
