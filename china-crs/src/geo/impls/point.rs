use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// Geographic point that is not bound to any coordinate frame.
///
/// Results of the obfuscation kernel (see [`kernel`](crate::geo::kernel)) are returned as this type, since they
/// are displacements rather than positions in some frame. It is also the interchange type of
/// [`FrameKind::transform`](crate::FrameKind::transform).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

impl RelativeEq for GeoPoint2d {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.lat.relative_eq(&other.lat, epsilon, max_relative)
            && self.lon.relative_eq(&other.lon, epsilon, max_relative)
    }
}

/// Creates a new [`GeoPoint2d`] from longitude and latitude values (in degrees).
///
/// ```
/// use china_crs::geo::GeoPoint;
/// use china_crs::lonlat;
///
/// let point = lonlat!(116.404, 39.915);
/// assert_eq!(point.lat(), 39.915);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        <$crate::geo::impls::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::lonlat($lon, $lat)
    };
}
