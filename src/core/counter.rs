//! Persistent run counter
//!
//! The counter disambiguates output filenames across runs: run N saves
//! `missing_persons_map_<N>.html` and then persists N+1 for the next run.
//!
//! # Lifecycle
//!
//! - Read once at process start from a counter file holding a single ASCII
//!   integer. An absent or unparsable file is a recovered condition and
//!   silently defaults the counter to 1.
//! - Advanced and rewritten at most once, only after a map has actually been
//!   saved. A run that collects no records leaves the file untouched.
//!
//! Concurrent processes racing on the same counter file are not coordinated;
//! the program is designed for one interactive operator per run.

use crate::types::MapperError;
use std::fs;
use std::path::{Path, PathBuf};

/// Default counter file path, relative to the working directory
pub const DEFAULT_COUNTER_FILE: &str = "output_counter.txt";

/// Persisted run counter
#[derive(Debug, Clone)]
pub struct RunCounter {
    value: u64,
    path: PathBuf,
}

impl RunCounter {
    /// Load the counter from `path`
    ///
    /// Defaults to 1 when the file is absent or does not hold a single
    /// integer. Neither case is reported; both are expected on a first run.
    pub fn load(path: &Path) -> Self {
        let value = fs::read_to_string(path)
            .ok()
            .and_then(|contents| contents.trim().parse::<u64>().ok())
            .unwrap_or(1);

        RunCounter {
            value,
            path: path.to_path_buf(),
        }
    }

    /// Current counter value
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Output filename for the current run
    pub fn output_filename(&self) -> String {
        format!("missing_persons_map_{}.html", self.value)
    }

    /// Increment the counter and persist the new value
    ///
    /// Overwrites the counter file wholesale with the incremented value.
    /// Called only after the map document has been saved successfully.
    ///
    /// # Errors
    ///
    /// Returns `MapperError::IoError` if the counter file cannot be written.
    pub fn advance(&mut self) -> Result<(), MapperError> {
        self.value += 1;
        fs::write(&self.path, self.value.to_string()).map_err(|e| MapperError::IoError {
            message: format!("Failed to write '{}': {}", self.path.display(), e),
        })
    }
}
