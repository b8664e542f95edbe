//! Environment snapshot for the greeter
//!
//! Captures the process environment once at startup and layers an optional
//! `.env` file beneath it. Commands receive the snapshot (or settings resolved
//! from it) instead of reading the process environment themselves.
//!
//! ## Resolution Order
//!
//! 1. Variables already set in the process environment
//! 2. Variables from the `.env` file (never override step 1)
//!
//! A missing, unreadable or partly malformed `.env` file never fails loading:
//! bad entries are skipped and recorded as warnings for the caller to log.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

/// Owned key/value view of the environment
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,

    /// Problems met while reading the `.env` file
    dotenv_warnings: Vec<String>,
}

impl Environment {
    /// Snapshot the current process environment
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| {
                Some((key.into_string().ok()?, value.into_string().ok()?))
            })
            .collect();

        Self {
            vars,
            dotenv_warnings: Vec::new(),
        }
    }

    /// Build an environment from explicit pairs (useful for testing)
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self {
            vars,
            dotenv_warnings: Vec::new(),
        }
    }

    /// Snapshot the process environment and merge the `.env` file into it
    ///
    /// With `env_file` set only that path is read; otherwise `.env` is
    /// searched for from the working directory upward.
    pub fn load(env_file: Option<&Path>) -> Self {
        let mut env = Self::from_process();
        env.merge_dotenv(env_file);
        env
    }

    /// Merge variables from a `.env` file without overriding existing ones
    ///
    /// Lines dotenvy cannot parse are skipped; the remaining lines still
    /// apply. Returns the number of variables added.
    pub fn merge_dotenv(&mut self, env_file: Option<&Path>) -> usize {
        let iter = match env_file {
            Some(path) => dotenvy::from_path_iter(path),
            None => dotenvy::dotenv_iter(),
        };

        let iter = match iter {
            Ok(iter) => iter,
            Err(err) if err.not_found() => return 0,
            Err(err) => {
                self.dotenv_warnings
                    .push(format!("Failed to read .env file: {}", err));
                return 0;
            }
        };

        let mut added = 0;
        for item in iter {
            match item {
                Ok((key, value)) => {
                    if let Entry::Vacant(slot) = self.vars.entry(key) {
                        slot.insert(value);
                        added += 1;
                    }
                }
                Err(err @ dotenvy::Error::Io(_)) => {
                    self.dotenv_warnings
                        .push(format!("Failed to read .env file: {}", err));
                    break;
                }
                Err(err) => self.dotenv_warnings.push(err.to_string()),
            }
        }

        added
    }

    /// Look up a variable
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a variable, treating an empty value as absent
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Entries skipped while reading the `.env` file
    pub fn dotenv_warnings(&self) -> &[String] {
        &self.dotenv_warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_pairs() {
        let env = Environment::from_pairs([("GREETING_MESSAGE", "Hi")]);
        assert_eq!(env.get("GREETING_MESSAGE"), Some("Hi"));
        assert_eq!(env.get("LOG_LEVEL"), None);
    }

    #[test]
    fn test_get_non_empty() {
        let env = Environment::from_pairs([("EMPTY", ""), ("SET", "value")]);
        assert_eq!(env.get("EMPTY"), Some(""));
        assert_eq!(env.get_non_empty("EMPTY"), None);
        assert_eq!(env.get_non_empty("SET"), Some("value"));
    }

    #[test]
    fn test_merge_dotenv_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "GREETING_MESSAGE=\"Hello from file\"\nLOG_LEVEL=debug\n").unwrap();

        let mut env = Environment::default();
        let added = env.merge_dotenv(Some(&path));

        assert_eq!(added, 2);
        assert_eq!(env.get("GREETING_MESSAGE"), Some("Hello from file"));
        assert_eq!(env.get("LOG_LEVEL"), Some("debug"));
        assert!(env.dotenv_warnings().is_empty());
    }

    #[test]
    fn test_dotenv_does_not_override_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "GREETING_MESSAGE=from_file\n").unwrap();

        let mut env = Environment::from_pairs([("GREETING_MESSAGE", "from process")]);
        let added = env.merge_dotenv(Some(&path));

        assert_eq!(added, 0);
        assert_eq!(env.get("GREETING_MESSAGE"), Some("from process"));
    }

    #[test]
    fn test_missing_file_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does-not-exist.env");

        let mut env = Environment::from_pairs([("KEEP", "me")]);
        let added = env.merge_dotenv(Some(&path));

        assert_eq!(added, 0);
        assert_eq!(env.get("KEEP"), Some("me"));
        assert!(env.dotenv_warnings().is_empty());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(
            &path,
            "THIS IS NOT VALID\nGREETING_MESSAGE=\"Hi from file\"\nOTHER=x y z\nLOG_LEVEL=debug\n",
        )
        .unwrap();

        let mut env = Environment::default();
        let added = env.merge_dotenv(Some(&path));

        assert_eq!(added, 2);
        assert_eq!(env.get("GREETING_MESSAGE"), Some("Hi from file"));
        assert_eq!(env.get("LOG_LEVEL"), Some("debug"));
        assert_eq!(env.get("OTHER"), None);
        assert_eq!(env.dotenv_warnings().len(), 2);
    }

    #[test]
    fn test_unreadable_path_is_a_warning() {
        let temp_dir = TempDir::new().unwrap();

        // A directory opens on unix but fails on the first read
        let mut env = Environment::from_pairs([("KEEP", "me")]);
        let added = env.merge_dotenv(Some(temp_dir.path()));

        assert_eq!(added, 0);
        assert_eq!(env.get("KEEP"), Some("me"));
        assert_eq!(env.dotenv_warnings().len(), 1);
    }
}
