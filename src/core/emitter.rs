//! Final map emission
//!
//! Runs exactly once, after the record source has reached its terminal
//! state. An empty session is reported and produces no file I/O and no
//! counter mutation; a non-empty session is rendered to a uniquely numbered
//! HTML file and the run counter is advanced and persisted.
//!
//! Markers were already placed while records were accumulated, so emission
//! only renders, saves, and reports. Feedback goes to the provided writer in
//! the same interaction stream as the prompts.
//!
//! Failures while saving the map or persisting the counter are fatal and
//! propagate to the caller; there is no retry and no partial-output cleanup.

use crate::core::counter::RunCounter;
use crate::core::session::Session;
use crate::types::MapperError;
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Render and save the collected records, advancing the run counter
///
/// If the session holds no records, reports "no data" and returns `Ok(None)`
/// without touching the filesystem. Otherwise saves the map document as
/// `missing_persons_map_<N>.html` under `output_dir`, reports the saved
/// filename, and persists the incremented counter.
///
/// # Errors
///
/// Returns `MapperError::IoError` if the map file, the counter file, or the
/// feedback stream cannot be written.
pub fn emit(
    session: &Session,
    counter: &mut RunCounter,
    output_dir: &Path,
    feedback: &mut dyn Write,
) -> Result<Option<PathBuf>, MapperError> {
    if session.is_empty() {
        writeln!(
            feedback,
            "{}",
            "No data provided, so the map was not saved.".red()
        )?;
        return Ok(None);
    }

    let filename = counter.output_filename();
    let output_path = output_dir.join(&filename);
    session.map().save(&output_path)?;

    writeln!(feedback, "{}", format!("Map saved as {}", filename).green())?;

    counter.advance()?;

    Ok(Some(output_path))
}
