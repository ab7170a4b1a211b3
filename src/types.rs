//! Result types shared by the search simulator and the strength estimator.

use std::fmt;
use std::time::Duration;

use secrecy::SecretString;

/// A single probe made by a search: the candidate compared and whether it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub candidate: String,
    pub is_match: bool,
}

impl AttemptRecord {
    pub fn new(candidate: impl Into<String>, is_match: bool) -> Self {
        Self {
            candidate: candidate.into(),
            is_match,
        }
    }
}

/// Which algorithm produced a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMethod {
    Linear,
    Binary,
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMethod::Linear => write!(f, "Linear Search"),
            SearchMethod::Binary => write!(f, "Binary Search"),
        }
    }
}

/// The trace of a finished search.
///
/// `found` is derived from the trace and never set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub trace: Vec<AttemptRecord>,
    pub found: bool,
    pub elapsed: Duration,
    /// Set when the pacer stopped the search before it terminated on its own.
    pub interrupted: bool,
}

impl SearchResult {
    pub fn from_trace(trace: Vec<AttemptRecord>, elapsed: Duration, interrupted: bool) -> Self {
        let found = trace.iter().any(|a| a.is_match);
        Self {
            trace,
            found,
            elapsed,
            interrupted,
        }
    }

    pub fn attempt_count(&self) -> usize {
        self.trace.len()
    }

    /// Human readable sentence describing the outcome.
    pub fn summary(&self, method: SearchMethod) -> String {
        if self.found {
            format!(
                "Password found in {} attempts using {}.",
                self.attempt_count(),
                method
            )
        } else {
            format!(
                "Password NOT found after {} attempts using {}.",
                self.attempt_count(),
                method
            )
        }
    }

    /// Short outcome used in history listings, e.g. `3 attempts (found)`.
    pub fn outcome(&self) -> String {
        format!(
            "{} attempts ({})",
            self.attempt_count(),
            if self.found { "found" } else { "not found" }
        )
    }
}

/// Binary search result together with the sorted list it probed.
#[derive(Debug, Clone, PartialEq)]
pub struct BinarySearchResult {
    pub sorted: Vec<String>,
    pub result: SearchResult,
}

/// Both searches run against the same target and candidate list.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchComparison {
    pub target: String,
    pub linear: SearchResult,
    pub binary: BinarySearchResult,
}

impl SearchComparison {
    pub fn linear_message(&self) -> String {
        self.linear.summary(SearchMethod::Linear)
    }

    pub fn binary_message(&self) -> String {
        self.binary.result.summary(SearchMethod::Binary)
    }
}

/// The fixed set of strength criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Digit,
    Upper,
    Lower,
    Special,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Digit,
        Criterion::Upper,
        Criterion::Lower,
        Criterion::Special,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Digit => "digit",
            Criterion::Upper => "upper",
            Criterion::Lower => "lower",
            Criterion::Special => "special",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of every criterion, each evaluated on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CriteriaResult {
    pub length: bool,
    pub digit: bool,
    pub upper: bool,
    pub lower: bool,
    pub special: bool,
}

impl CriteriaResult {
    pub fn get(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.length,
            Criterion::Digit => self.digit,
            Criterion::Upper => self.upper,
            Criterion::Lower => self.lower,
            Criterion::Special => self.special,
        }
    }

    pub fn set(&mut self, criterion: Criterion, passed: bool) {
        match criterion {
            Criterion::Length => self.length = passed,
            Criterion::Digit => self.digit = passed,
            Criterion::Upper => self.upper = passed,
            Criterion::Lower => self.lower = passed,
            Criterion::Special => self.special = passed,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn passed_count(&self) -> usize {
        self.iter().filter(|&(_, passed)| passed).count()
    }
}

/// Overall classification, a function of the passed criteria count only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Moderate => write!(f, "Moderate"),
            Strength::Strong => write!(f, "Strong"),
        }
    }
}

/// Full result of a strength analysis.
#[derive(Debug)]
pub struct StrengthReport {
    pub criteria: CriteriaResult,
    pub passed_count: usize,
    pub strength: Strength,
    /// Rounded to two decimals.
    pub entropy_bits: f64,
    pub crack_time: String,
    /// Guesses per second used for `crack_time`.
    pub crack_speed: f64,
    pub crack_speed_readable: String,
    /// The password, characters reversed.
    pub reversed: SecretString,
}
