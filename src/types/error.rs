//! Error types for the Missing Persons Mapper
//!
//! This module defines all error types that can occur while collecting
//! records and emitting the map document. Errors are designed to be
//! descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc. (fatal)
//! - **CSV Parsing Errors**: Malformed CSV rows in batch import (recoverable)
//! - **Coordinate Errors**: Non-numeric latitude/longitude (recoverable)

use thiserror::Error;

/// Main error type for the mapper
///
/// This enum represents all possible errors that can occur during record
/// collection and map emission. Each variant includes relevant context to
/// help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapperError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing output
    ///
    /// This is typically a fatal error (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred during batch import
    ///
    /// This is a recoverable error - the malformed row is skipped and
    /// processing continues with the next row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Non-numeric latitude or longitude value
    ///
    /// This is a recoverable error - the record is discarded and collection
    /// continues with the next record.
    #[error("Invalid {field} '{value}': expected a numeric value")]
    InvalidCoordinate {
        /// Which coordinate failed to parse ("latitude" or "longitude")
        field: &'static str,
        /// The value that failed to parse
        value: String,
    },
}

// Conversion from io::Error to MapperError
impl From<std::io::Error> for MapperError {
    fn from(error: std::io::Error) -> Self {
        MapperError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to MapperError
impl From<csv::Error> for MapperError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        MapperError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl MapperError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        MapperError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an InvalidCoordinate error
    pub fn invalid_coordinate(field: &'static str, value: &str) -> Self {
        MapperError::InvalidCoordinate {
            field,
            value: value.to_string(),
        }
    }

    /// Create a ParseError with an optional line number
    pub fn parse_error(line: Option<u64>, message: &str) -> Self {
        MapperError::ParseError {
            line,
            message: message.to_string(),
        }
    }
}
