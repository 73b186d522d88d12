//! Record source module
//!
//! This module defines the seam between record collection and the rest of
//! the pipeline. A record source drives one collection pass, hands every
//! validated record to the session, and handles its own recoverable errors;
//! only fatal conditions are returned. This allows different collection
//! implementations (interactive terminal, CSV batch import) to be selected
//! at runtime.

use crate::core::Session;
use crate::types::MapperError;

pub mod csv;
pub mod interactive;

pub use self::csv::CsvSource;
pub use interactive::InteractiveSource;

use crate::cli::CliArgs;

/// Record source trait for complete collection passes
pub trait RecordSource {
    /// Collect records into the session until the source is exhausted
    ///
    /// Recoverable per-record errors (non-numeric coordinates, malformed
    /// CSV rows) are reported by the source itself and do not end the pass.
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal conditions: the input file cannot be
    /// opened, or the terminal cannot be read or written.
    fn collect(&mut self, session: &mut Session) -> Result<(), MapperError>;
}

/// Create a record source based on the parsed CLI arguments
///
/// `--input FILE` selects the CSV batch source; otherwise records are
/// collected interactively from the process stdin/stdout.
pub fn create_source(args: &CliArgs) -> Box<dyn RecordSource> {
    match &args.input {
        Some(path) => Box::new(CsvSource::new(path.clone())),
        None => Box::new(InteractiveSource::stdio()),
    }
}
