//! Collection session
//!
//! The session is the accumulator for one process run: an ordered record
//! collection plus the in-progress map document. It is constructed in `main`
//! and threaded explicitly through the record source and the emitter; there
//! is no process-global state.
//!
//! [`Session::add_record`] is the only mutation path into the collection.
//! It has no rollback: once a record is handed over it stays for the rest of
//! the run.

use crate::map::MapDocument;
use crate::types::MissingPerson;

/// Accumulated state for one run
#[derive(Debug, Default)]
pub struct Session {
    records: Vec<MissingPerson>,
    map: MapDocument,
}

impl Session {
    /// Create an empty session with a fresh map document
    pub fn new() -> Self {
        Session {
            records: Vec::new(),
            map: MapDocument::new(),
        }
    }

    /// Append a validated record and mark it on the map
    ///
    /// Records are kept in insertion order; duplicates are permitted and
    /// each gets its own marker. This is the only place markers are added,
    /// so the map always holds exactly one marker per stored record. The
    /// caller guarantees that both coordinates have passed numeric parsing.
    pub fn add_record(&mut self, record: MissingPerson) {
        self.map
            .add_marker(&record.name, record.latitude, record.longitude);
        self.records.push(record);
    }

    /// Whether no records have been collected
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of collected records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Collected records in insertion order
    pub fn records(&self) -> &[MissingPerson] {
        &self.records
    }

    /// The in-progress map document
    pub fn map(&self) -> &MapDocument {
        &self.map
    }
}
