//! Streaming CSV reader with iterator interface
//!
//! Provides a streaming iterator over missing-person records from a CSV
//! file. Delegates format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator,
//!   with line numbers included for reporting
//!
//! # Memory Efficiency
//!
//! Rows are read one at a time; memory usage is O(1) per row, not
//! O(file_size).

use crate::io::csv_format::{convert_row, CsvRow};
use crate::types::{MapperError, MissingPerson};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming CSV record reader
///
/// Implements `Iterator`, yielding `Result<MissingPerson, MapperError>` per
/// CSV row.
#[derive(Debug)]
pub struct CsvReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl CsvReader {
    /// Create a new CsvReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration. The
    /// reader trims whitespace from all fields and expects the header
    /// `name,latitude,longitude,postal_code,place,country`.
    ///
    /// # Errors
    ///
    /// * `MapperError::FileNotFound` if the path does not exist
    /// * `MapperError::IoError` if the file cannot be opened
    pub fn new(path: &Path) -> Result<Self, MapperError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => MapperError::file_not_found(&path.display().to_string()),
            _ => MapperError::IoError {
                message: format!("Failed to open '{}': {}", path.display(), e),
            },
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1, // line 1 is the header
        })
    }
}

impl Iterator for CsvReader {
    type Item = Result<MissingPerson, MapperError>;

    /// Get the next record from the CSV file
    ///
    /// Deserializes the next row and converts it to a MissingPerson,
    /// attaching the row's line number to any recoverable error.
    fn next(&mut self) -> Option<Self::Item> {
        let mut rows = self.reader.deserialize::<CsvRow>();

        match rows.next()? {
            Ok(row) => {
                self.line_num += 1;
                let line = self.line_num;
                Some(convert_row(row).map_err(|e| match e {
                    MapperError::InvalidCoordinate { field, value } => MapperError::ParseError {
                        line: Some(line),
                        message: MapperError::InvalidCoordinate { field, value }.to_string(),
                    },
                    other => other,
                }))
            }
            Err(e) => {
                self.line_num += 1;
                let line = e.position().map(|pos| pos.line()).unwrap_or(self.line_num);
                Some(Err(MapperError::ParseError {
                    line: Some(line),
                    message: e.to_string(),
                }))
            }
        }
    }
}
