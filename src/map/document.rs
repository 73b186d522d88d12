//! Interactive map document builder
//!
//! Builds a standalone Leaflet HTML document with one labeled marker per
//! collected record, two switchable background layers and a layer control.
//!
//! # Design
//!
//! The document is assembled in memory as a list of markers plus fixed view
//! parameters, and only turned into HTML when [`MapDocument::render`] is
//! called. Marker data is embedded into the page as a JSON literal so that
//! arbitrary names (quotes, angle brackets, unicode) cannot break out of the
//! script block.
//!
//! Every call to [`MapDocument::add_marker`] appends a marker: duplicate
//! records are permitted and each renders its own marker. The session's
//! `add_record` is the single insertion point, so the document holds exactly
//! one marker per accepted record, in insertion order.

use crate::types::MapperError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Page skeleton with `@TOKEN@` placeholders filled in by [`MapDocument::render`]
const PAGE_TEMPLATE: &str = include_str!("template.html");

/// Default map center (latitude, longitude)
pub const DEFAULT_CENTER: (f64, f64) = (40.7128, -74.0060);

/// Default initial zoom level
pub const DEFAULT_ZOOM: u8 = 5;

/// A labeled point on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Tooltip text shown on hover
    pub name: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

/// In-progress interactive map
///
/// Ephemeral per run: built incrementally while records are collected,
/// rendered and saved once at the end, never persisted across runs.
#[derive(Debug, Clone)]
pub struct MapDocument {
    center: (f64, f64),
    zoom: u8,
    markers: Vec<Marker>,
}

impl MapDocument {
    /// Create an empty document with the default center and zoom
    pub fn new() -> Self {
        MapDocument {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            markers: Vec::new(),
        }
    }

    /// Add a labeled marker at (latitude, longitude)
    ///
    /// Insertion order is preserved. Duplicate labels and positions are
    /// permitted; every call appends a marker.
    pub fn add_marker(&mut self, name: &str, lat: f64, lon: f64) {
        self.markers.push(Marker {
            name: name.to_string(),
            lat,
            lon,
        });
    }

    /// Number of markers currently on the document
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Markers in insertion order
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Render the document to a standalone HTML page
    ///
    /// The page loads Leaflet from a CDN, creates the map at the configured
    /// center and zoom, attaches the "Street View" and "Real-Time View" tile
    /// layers with a layer control, and adds one tooltip marker per entry.
    pub fn render(&self) -> String {
        // Escaping '<' inside JSON strings keeps a literal "</script>" in a
        // name from terminating the script element.
        let markers_json = serde_json::to_string(&self.markers)
            .unwrap_or_else(|_| "[]".to_string())
            .replace('<', "\\u003c");

        PAGE_TEMPLATE
            .replace("@CENTER_LAT@", &self.center.0.to_string())
            .replace("@CENTER_LON@", &self.center.1.to_string())
            .replace("@ZOOM@", &self.zoom.to_string())
            .replace("@MARKERS@", &markers_json)
    }

    /// Render the document and write it to `path`
    ///
    /// # Errors
    ///
    /// Returns `MapperError::IoError` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), MapperError> {
        fs::write(path, self.render()).map_err(|e| MapperError::IoError {
            message: format!("Failed to write '{}': {}", path.display(), e),
        })
    }
}

impl Default for MapDocument {
    fn default() -> Self {
        Self::new()
    }
}
