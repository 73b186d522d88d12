//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Missing-person record
//! - `error`: Error types for the mapper

pub mod error;
pub mod record;

pub use error::MapperError;
pub use record::MissingPerson;
