//! Missing Persons Mapper Library
//! # Overview
//!
//! This library collects missing-person geolocation records from a terminal
//! session or a CSV file and renders them as labeled markers on a standalone
//! interactive HTML map.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (MissingPerson, MapperError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::session`] - Ordered record accumulation and the in-progress map
//!   - [`core::counter`] - Persistent run counter for output filenames
//!   - [`core::emitter`] - Final render/save/report step
//! - [`io`] - Terminal prompting and CSV parsing
//! - [`source`] - Pluggable record sources (interactive, CSV batch)
//! - [`map`] - Leaflet HTML map document builder
//!
//! # Run lifecycle
//!
//! A run constructs a [`core::Session`] and a [`core::RunCounter`], selects a
//! [`source::RecordSource`] from the CLI arguments, collects records until the
//! source terminates (the `q` sentinel, end of input, or end of file), and
//! then emits the map exactly once. A run that collects no records saves
//! nothing and leaves the counter file untouched, so repeated empty runs are
//! idempotent.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod map;
pub mod source;
pub mod types;

pub use crate::core::{emit, RunCounter, Session};
pub use map::MapDocument;
pub use source::{create_source, CsvSource, InteractiveSource, RecordSource};
pub use types::{MapperError, MissingPerson};
