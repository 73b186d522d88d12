//! CSV batch record source
//!
//! Implements the [`RecordSource`] trait over a CSV file, streaming rows
//! through [`CsvReader`]. Rows that fail coordinate parsing or CSV
//! structure checks are recoverable: they are reported to stderr with their
//! line number and skipped, and the pass continues with the next row.
//!
//! In this mode a name of `q` is ordinary data, not a sentinel.

use crate::core::Session;
use crate::io::CsvReader;
use crate::source::RecordSource;
use crate::types::MapperError;
use colored::Colorize;
use std::path::PathBuf;

/// CSV file record source
#[derive(Debug)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Create a source reading from the given CSV file
    pub fn new(path: PathBuf) -> Self {
        CsvSource { path }
    }
}

impl RecordSource for CsvSource {
    fn collect(&mut self, session: &mut Session) -> Result<(), MapperError> {
        let reader = CsvReader::new(&self.path)?;

        for result in reader {
            match result {
                Ok(record) => session.add_record(record),
                Err(e) => eprintln!("{}", format!("Skipping record: {}", e).red()),
            }
        }

        Ok(())
    }
}
