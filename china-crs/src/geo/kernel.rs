//! Obfuscation kernel of the GCJ-02 frame.
//!
//! The formulas are empirical and must be evaluated exactly in the given order to produce the same values as
//! other implementations of the algorithm.

use std::f64::consts::{FRAC_PI_3, PI};

use crate::geo::datum::Datum;
use crate::geo::impls::GeoPoint2d;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

// Correctly rounded values. Computing `PI / 12.0` and `PI / 30.0` in `f64` gives a result one ulp lower.
const FRAC_PI_12: f64 = 0.261_799_387_799_149_46;
const FRAC_PI_30: f64 = 0.104_719_755_119_659_78;

/// Raw GCJ-02 displacement of the point.
///
/// The value is a function of the distance from `(105, 35)` and is not yet in degrees. See [`shift`] for the
/// displacement that is actually added to WGS84 coordinates.
pub fn offset(point: &impl GeoPoint<Num = f64>) -> GeoPoint2d {
    let dlon = point.lon() - 105.0;
    let dlat = point.lat() - 35.0;
    let base = 40.0 / 3.0 * ((6.0 * PI * dlon).sin() + (2.0 * PI * dlon).sin());

    let mut lon = 300.0
        + dlon
        + 2.0 * dlat
        + 0.1 * dlon * dlon
        + 0.1 * dlon * dlat
        + 0.1 * dlon.abs().sqrt()
        + base;
    lon += 40.0 / 3.0
        * ((PI * dlon).sin()
            + 2.0 * (FRAC_PI_3 * dlon).sin()
            + 7.5 * (FRAC_PI_12 * dlon).sin()
            + 15.0 * (FRAC_PI_30 * dlon).sin());

    let mut lat = -100.0
        + 2.0 * dlon
        + 3.0 * dlat
        + 0.2 * dlat * dlat
        + 0.1 * dlon * dlat
        + 0.2 * dlon.abs().sqrt()
        + base;
    lat += 40.0 / 3.0
        * ((PI * dlat).sin()
            + 2.0 * (FRAC_PI_3 * dlat).sin()
            + 8.0 * (FRAC_PI_12 * dlat).sin()
            + 16.0 * (FRAC_PI_30 * dlat).sin());

    GeoPoint2d::lonlat(lon, lat)
}

/// Displacement in degrees between WGS84 and GCJ-02 coordinates at the given point.
///
/// No bounds check is done here, the caller decides whether the point is subject to obfuscation.
pub fn shift(point: &impl GeoPoint<Num = f64>) -> GeoPoint2d {
    let datum = Datum::KRASOVSKY_1940;
    let a = datum.semimajor();
    let ee = datum.eccentricity_sq();

    let offset = offset(point);
    let rad_lat = point.lat_rad();
    let sin_lat = rad_lat.sin();
    let magic = 1.0 - ee * sin_lat * sin_lat;
    let sqrt_magic = magic.sqrt();

    // The raw offset is scaled by 180/PI as if it were an angle in radians.
    let lon = offset.lon().to_degrees() / a / rad_lat.cos() * sqrt_magic;
    let lat = offset.lat().to_degrees() / a / (1.0 - ee) * magic * sqrt_magic;

    GeoPoint2d::lonlat(lon, lat)
}
