use serde::{Deserialize, Serialize};

use crate::geo::traits::point::GeoPoint;

/// Rectangle in geographic coordinates, given in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRect {
    lon_min: f64,
    lat_min: f64,
    lon_max: f64,
    lat_max: f64,
}

impl GeoRect {
    /// Area in which GCJ-02 obfuscation is applied. Roughly the bounding box of mainland China.
    pub const CHINA: GeoRect = GeoRect::new(73.66, 3.86, 135.05, 53.55);

    /// Creates a new rectangle.
    pub const fn new(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lat_min,
            lon_max,
            lat_max,
        }
    }

    /// Western edge.
    pub fn lon_min(&self) -> f64 {
        self.lon_min
    }

    /// Eastern edge.
    pub fn lon_max(&self) -> f64 {
        self.lon_max
    }

    /// Southern edge.
    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    /// Northern edge.
    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    /// Returns true if the point lies inside the rectangle and not on its edges.
    ///
    /// Points with `NaN` coordinates are never inside.
    pub fn contains_strict(&self, point: &impl GeoPoint<Num = f64>) -> bool {
        point.lon() > self.lon_min
            && point.lon() < self.lon_max
            && point.lat() > self.lat_min
            && point.lat() < self.lat_max
    }
}

/// Returns true if the point is outside of [`GeoRect::CHINA`].
///
/// For such points GCJ-02 coordinates are the same as WGS84 coordinates.
pub fn out_of_china(point: &impl GeoPoint<Num = f64>) -> bool {
    !GeoRect::CHINA.contains_strict(point)
}
