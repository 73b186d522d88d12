//! I/O module
//!
//! Handles terminal prompting and CSV parsing.
//!
//! # Components
//!
//! - `prompt` - Colored question/answer terminal primitives
//! - `csv_format` - CSV row structure and row-to-record conversion
//! - `csv_reader` - Streaming CSV reader with iterator interface

pub mod csv_format;
pub mod csv_reader;
pub mod prompt;

pub use csv_format::{convert_row, CsvRow};
pub use csv_reader::CsvReader;
pub use prompt::Prompter;
