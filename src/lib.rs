//! Password search simulation and strength estimation library
//!
//! Two independent, stateless components:
//!
//! - the search simulator, which traces a linear search and a binary search
//!   for a target password through a list of known passwords;
//! - the strength estimator, which checks five criteria, estimates entropy
//!   from the character classes present and projects a brute-force crack time.
//!
//! The candidate store and the bounded histories are caller-side helpers.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable searches delivered via channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_SIM_STORE_PATH`: Path of the candidate store
//!   (default: `./password.txt`)
//! - `PWD_SIM_CRACK_SPEED`: Guesses per second used for crack time
//!   (default: `1e9`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_crack_sim::{CandidateStore, analyze_strength, parse_delay, simulate_search};
//! use secrecy::SecretString;
//!
//! let store = CandidateStore::from_env();
//! let candidates = store.load().expect("Failed to load candidates");
//!
//! let delay = parse_delay("0.2");
//! let comparison = simulate_search("letmein", &candidates, &delay);
//! println!("{}", comparison.linear_message());
//! println!("{}", comparison.binary_message());
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = analyze_strength(&password);
//! println!("Strength: {} ({} bits, {})", report.strength, report.entropy_bits, report.crack_time);
//! ```

// Internal modules
mod config;
mod crack_time;
mod entropy;
mod evaluator;
mod history;
mod search;
mod sections;
mod store;
mod types;

// Public API
pub use config::{DEFAULT_DELAY, ConfigError, SimConfig, crack_speed, parse_delay, store_path};
pub use crack_time::{
    DEFAULT_CRACK_SPEED, NOT_APPLICABLE, UNBOUNDED, estimate_crack_seconds, estimate_crack_time,
    format_crack_speed, format_crack_time,
};
pub use entropy::{CharClass, alphabet_size, compute_entropy_bits};
pub use evaluator::{analyze_strength, analyze_strength_with_speed, classify_strength};
pub use history::{AnalysisHistoryEntry, DEFAULT_HISTORY_CAPACITY, History, SearchHistoryEntry};
pub use search::{NoDelay, Pacer, binary_search, linear_search, simulate_search};
pub use sections::{CRITERIA, MIN_LENGTH, Predicate, SPECIAL_CHARACTERS, evaluate_criteria};
pub use store::{CandidateStore, StoreError};
pub use types::{
    AttemptRecord, BinarySearchResult, CriteriaResult, Criterion, SearchComparison, SearchMethod,
    SearchResult, Strength, StrengthReport,
};

#[cfg(feature = "async")]
pub use search::{CancellablePacer, simulate_search_tx};
