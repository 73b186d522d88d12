//! Record type for the Missing Persons Mapper
//!
//! Defines the core record collected from the operator. Coordinates have
//! already passed numeric parsing by the time a record is constructed; the
//! free-text fields are accepted as entered without validation.

/// One collected missing-person entry
#[derive(Debug, Clone, PartialEq)]
pub struct MissingPerson {
    /// Full name, free text
    ///
    /// The interactive input loop reserves the exact value `q` as its quit
    /// sentinel, so a record with this name can never be entered there.
    pub name: String,

    /// Latitude in decimal degrees
    ///
    /// No range validation is performed; values outside [-90, 90] are
    /// accepted as-is.
    pub latitude: f64,

    /// Longitude in decimal degrees
    ///
    /// No range validation is performed; values outside [-180, 180] are
    /// accepted as-is.
    pub longitude: f64,

    /// Place or locality, free text
    pub place: String,

    /// Country, free text
    pub country: String,

    /// Postal code, free text
    pub postal_code: String,
}
