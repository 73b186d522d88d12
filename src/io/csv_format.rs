//! CSV format handling for record batch import
//!
//! This module centralizes the CSV format concerns of the `--input` mode:
//! the row structure for deserialization and the conversion from a raw row
//! to a validated domain record.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{MapperError, MissingPerson};
use serde::Deserialize;

/// CSV row structure for deserialization
///
/// Matches the input CSV format with columns:
/// `name,latitude,longitude,postal_code,place,country`
///
/// Coordinates are kept as raw strings so that parse failures surface as
/// the mapper's own coordinate errors rather than serde errors.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRow {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub postal_code: String,
    pub place: String,
    pub country: String,
}

/// Convert a CsvRow to a MissingPerson record
///
/// Parses both coordinates; the free-text fields are taken as-is. Unlike
/// the interactive loop, a name of `q` is ordinary data here, not a
/// sentinel.
///
/// # Errors
///
/// Returns `MapperError::InvalidCoordinate` naming the first coordinate
/// that fails numeric parsing.
pub fn convert_row(row: CsvRow) -> Result<MissingPerson, MapperError> {
    let latitude = row
        .latitude
        .trim()
        .parse::<f64>()
        .map_err(|_| MapperError::invalid_coordinate("latitude", &row.latitude))?;
    let longitude = row
        .longitude
        .trim()
        .parse::<f64>()
        .map_err(|_| MapperError::invalid_coordinate("longitude", &row.longitude))?;

    Ok(MissingPerson {
        name: row.name,
        latitude,
        longitude,
        place: row.place,
        country: row.country,
        postal_code: row.postal_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(name: &str, lat: &str, lon: &str) -> CsvRow {
        CsvRow {
            name: name.to_string(),
            latitude: lat.to_string(),
            longitude: lon.to_string(),
            postal_code: "8001".to_string(),
            place: "Cape Town".to_string(),
            country: "South Africa".to_string(),
        }
    }

    #[test]
    fn test_convert_valid_row() {
        let record = convert_row(row("Jane Doe", "-33.9", "18.4")).expect("Conversion failed");

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.latitude, -33.9);
        assert_eq!(record.longitude, 18.4);
        assert_eq!(record.postal_code, "8001");
        assert_eq!(record.place, "Cape Town");
        assert_eq!(record.country, "South Africa");
    }

    #[rstest]
    #[case::padded_coordinates(" -26.2041 ", " 28.0473 ", -26.2041, 28.0473)]
    #[case::integer_coordinates("40", "-74", 40.0, -74.0)]
    #[case::scientific_notation("1e1", "-2e-1", 10.0, -0.2)]
    fn test_convert_accepts_numeric_forms(
        #[case] lat: &str,
        #[case] lon: &str,
        #[case] expected_lat: f64,
        #[case] expected_lon: f64,
    ) {
        let record = convert_row(row("Jane Doe", lat, lon)).expect("Conversion failed");
        assert_eq!(record.latitude, expected_lat);
        assert_eq!(record.longitude, expected_lon);
    }

    // Range validation is intentionally absent; out-of-range values pass.
    #[test]
    fn test_convert_accepts_out_of_range_coordinates() {
        let record = convert_row(row("Jane Doe", "200", "400")).expect("Conversion failed");
        assert_eq!(record.latitude, 200.0);
        assert_eq!(record.longitude, 400.0);
    }

    #[rstest]
    #[case::bad_latitude("north", "18.4", "latitude")]
    #[case::bad_longitude("-33.9", "east", "longitude")]
    #[case::empty_latitude("", "18.4", "latitude")]
    #[case::comma_decimal("-33,9", "18.4", "latitude")]
    fn test_convert_rejects_non_numeric(
        #[case] lat: &str,
        #[case] lon: &str,
        #[case] failing_field: &str,
    ) {
        let result = convert_row(row("Jane Doe", lat, lon));
        match result {
            Err(MapperError::InvalidCoordinate { field, .. }) => {
                assert_eq!(field, failing_field)
            }
            other => panic!("Expected InvalidCoordinate, got {:?}", other),
        }
    }

    #[test]
    fn test_sentinel_name_is_data_in_csv_mode() {
        let record = convert_row(row("q", "-33.9", "18.4")).expect("Conversion failed");
        assert_eq!(record.name, "q");
    }
}
