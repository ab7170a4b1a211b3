//! Candidate store
//!
//! Flat text file of known passwords, one per line. Supplies the candidate
//! list for search simulations and records analyzed passwords.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::store_path;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read candidate store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write candidate store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Line-oriented password file.
#[derive(Debug, Clone)]
pub struct CandidateStore {
    path: PathBuf,
}

impl CandidateStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at the path given by `PWD_SIM_STORE_PATH`, or `./password.txt`.
    pub fn from_env() -> Self {
        Self::new(store_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads candidates in file order.
    ///
    /// Lines are trimmed; blank lines and `#` comments are skipped. A missing
    /// file yields an empty list.
    pub fn load(&self) -> Result<Vec<String>, StoreError> {
        let Some(content) = self.read_content()? else {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Candidate store {:?} not found, using an empty list",
                self.path
            );
            return Ok(Vec::new());
        };

        let candidates: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(String::from)
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Candidate store loaded: {} passwords from {:?}",
            candidates.len(),
            self.path
        );

        Ok(candidates)
    }

    /// Appends `password` unless it is empty or already stored verbatim.
    ///
    /// Returns `true` when the password was written.
    pub fn record(&self, password: &SecretString) -> Result<bool, StoreError> {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return Ok(false);
        }

        let content = self.read_content()?.unwrap_or_default();
        let existing: HashSet<&str> = content.lines().map(str::trim).collect();
        if existing.contains(pwd) {
            return Ok(false);
        }

        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        let separator = if content.is_empty() || content.ends_with('\n') {
            ""
        } else {
            "\n"
        };
        writeln!(file, "{}{}", separator, pwd).map_err(write_err)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Stored analyzed password in {:?}", self.path);

        Ok(true)
    }

    fn read_content(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::{NamedTempFile, TempDir};

    fn setup_with_tempfile(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_load_skips_blank_and_comment_lines() {
        let temp_file = setup_with_tempfile(&["# header", "alpha", "", "  beta  ", "   ", "#gamma", "delta"]);
        let store = CandidateStore::new(temp_file.path());

        let candidates = store.load().expect("load should succeed");
        assert_eq!(candidates, vec!["alpha", "beta", "delta"]);
    }

    #[test]
    fn test_load_keeps_duplicates_and_order() {
        let temp_file = setup_with_tempfile(&["zeta", "alpha", "zeta"]);
        let store = CandidateStore::new(temp_file.path());

        assert_eq!(store.load().unwrap(), vec!["zeta", "alpha", "zeta"]);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = CandidateStore::new(dir.path().join("missing.txt"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_directory_is_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = CandidateStore::new(dir.path());

        assert!(matches!(store.load(), Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_record_appends_new_password() {
        let temp_file = setup_with_tempfile(&["alpha"]);
        let store = CandidateStore::new(temp_file.path());

        assert!(store.record(&secret("Beta#42")).unwrap());
        assert_eq!(store.load().unwrap(), vec!["alpha", "Beta#42"]);
    }

    #[test]
    fn test_record_skips_existing_case_sensitive() {
        let temp_file = setup_with_tempfile(&["alpha"]);
        let store = CandidateStore::new(temp_file.path());

        assert!(!store.record(&secret("alpha")).unwrap());
        assert!(store.record(&secret("ALPHA")).unwrap());
        assert_eq!(store.load().unwrap(), vec!["alpha", "ALPHA"]);
    }

    #[test]
    fn test_record_skips_empty_password() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("password.txt");
        let store = CandidateStore::new(&path);

        assert!(!store.record(&secret("")).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_record_creates_missing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = CandidateStore::new(dir.path().join("password.txt"));

        assert!(store.record(&secret("first")).unwrap());
        assert!(store.record(&secret("second")).unwrap());
        assert_eq!(store.load().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_record_after_unterminated_last_line() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "alpha").expect("Failed to write");
        let store = CandidateStore::new(temp_file.path());

        assert!(store.record(&secret("beta")).unwrap());
        assert_eq!(store.load().unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    #[serial]
    fn test_from_env_uses_configured_path() {
        let temp_file = setup_with_tempfile(&["from-env"]);
        let path = temp_file.path().to_str().unwrap();
        unsafe { std::env::set_var("PWD_SIM_STORE_PATH", path); }

        let store = CandidateStore::from_env();
        assert_eq!(store.path(), temp_file.path());
        assert_eq!(store.load().unwrap(), vec!["from-env"]);

        unsafe { std::env::remove_var("PWD_SIM_STORE_PATH"); }
    }
}
