//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Coordinate conversions never fail. Errors are only produced when validating or parsing input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChinaCrsError {
    /// Coordinate value is not finite or is outside of the valid longitude/latitude range.
    #[error("invalid coordinate: lon = {lon}, lat = {lat}")]
    InvalidCoordinate {
        /// Longitude in degrees.
        lon: f64,
        /// Latitude in degrees.
        lat: f64,
    },
    /// Name of a coordinate frame could not be recognized.
    #[error("unknown coordinate frame: {0}")]
    UnknownFrame(String),
}
