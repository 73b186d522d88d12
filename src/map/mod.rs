//! Map rendering module
//!
//! Builds the standalone interactive HTML map document.

pub mod document;

pub use document::{MapDocument, Marker, DEFAULT_CENTER, DEFAULT_ZOOM};
