//! Password criteria sections
//!
//! Each section checks one aspect of a password. Every criterion is evaluated
//! on its own; none reads the result of another.

mod length;
mod variety;

use secrecy::{ExposeSecret, SecretString};

use crate::types::{CriteriaResult, Criterion};

pub use length::{MIN_LENGTH, has_min_length};
pub use variety::{
    SPECIAL_CHARACTERS, has_digit, has_lower, has_special, has_upper, is_decimal_digit, is_special,
};

/// Predicate deciding whether a password satisfies one criterion.
pub type Predicate = fn(&str) -> bool;

/// Fixed criterion table, in reporting order.
pub const CRITERIA: [(Criterion, Predicate); 5] = [
    (Criterion::Length, has_min_length),
    (Criterion::Digit, has_digit),
    (Criterion::Upper, has_upper),
    (Criterion::Lower, has_lower),
    (Criterion::Special, has_special),
];

/// Evaluates all five criteria against the password.
pub fn evaluate_criteria(password: &SecretString) -> CriteriaResult {
    let pwd = password.expose_secret();
    let mut result = CriteriaResult::default();
    for (criterion, check) in CRITERIA {
        result.set(criterion, check(pwd));
    }
    result
}
