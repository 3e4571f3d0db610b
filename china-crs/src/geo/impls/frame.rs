use std::fmt;
use std::marker::PhantomData;

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::error::ChinaCrsError;
use crate::geo::bounds::out_of_china;
use crate::geo::crs::FrameKind;
use crate::geo::impls::point::GeoPoint2d;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

mod sealed {
    pub trait Sealed {}
}

/// Marker type of a coordinate frame.
///
/// Implemented only by [`Wgs84`], [`Gcj02`] and [`Bd09`].
pub trait Frame:
    sealed::Sealed + fmt::Debug + Default + Copy + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// Runtime identifier of the frame.
    const KIND: FrameKind;
}

/// WGS84 frame: raw GPS coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wgs84;

/// GCJ-02 frame: coordinates obfuscated according to the national standard of China.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gcj02;

/// BD-09 frame: coordinates used by Baidu maps, obfuscated further on top of GCJ-02.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bd09;

impl sealed::Sealed for Wgs84 {}
impl sealed::Sealed for Gcj02 {}
impl sealed::Sealed for Bd09 {}

impl Frame for Wgs84 {
    const KIND: FrameKind = FrameKind::Wgs84;
}

impl Frame for Gcj02 {
    const KIND: FrameKind = FrameKind::Gcj02;
}

impl Frame for Bd09 {
    const KIND: FrameKind = FrameKind::Bd09;
}

/// Geographic point in the coordinate frame `F`.
///
/// Points of different frames share the same layout, but converting between them is only possible with the
/// conversion methods (e.g. [`WgsPoint::to_gcj`]), so coordinates of one frame cannot be silently used as
/// coordinates of another one:
///
/// ```compile_fail
/// use china_crs::{BdPoint, WgsPoint};
///
/// fn show_on_baidu_map(point: BdPoint) {}
///
/// show_on_baidu_map(WgsPoint::new(116.404, 39.915));
/// ```
///
/// No validation is done on construction: any values are accepted and go through conversions as is. Use
/// [`FramePoint::try_new`] to reject invalid input.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct FramePoint<F> {
    lon: f64,
    lat: f64,
    #[serde(skip)]
    frame: PhantomData<F>,
}

/// Point in WGS84 frame.
pub type WgsPoint = FramePoint<Wgs84>;
/// Point in GCJ-02 frame.
pub type GcjPoint = FramePoint<Gcj02>;
/// Point in BD-09 frame.
pub type BdPoint = FramePoint<Bd09>;

impl<F: Frame> FramePoint<F> {
    /// Creates a new point from longitude and latitude in degrees.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            frame: PhantomData,
        }
    }

    /// Creates a new point, checking that both coordinates are finite and longitude and latitude are within
    /// `[-180, 180]` and `[-90, 90]` respectively.
    pub fn try_new(lon: f64, lat: f64) -> Result<Self, ChinaCrsError> {
        let is_valid =
            lon.is_finite() && lat.is_finite() && lon.abs() <= 180.0 && lat.abs() <= 90.0;
        if !is_valid {
            return Err(ChinaCrsError::InvalidCoordinate { lon, lat });
        }

        Ok(Self::new(lon, lat))
    }

    /// Marks coordinates of an untagged point as belonging to this frame.
    pub fn from_untagged(point: GeoPoint2d) -> Self {
        Self::new(point.lon(), point.lat())
    }

    /// Frame of the point.
    pub fn kind(&self) -> FrameKind {
        F::KIND
    }

    /// Returns true if the point is inside the area where the obfuscation is applied.
    pub fn is_in_china(&self) -> bool {
        !out_of_china(self)
    }
}

impl<F: Frame> GeoPoint for FramePoint<F> {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl<F: Frame> NewGeoPoint<f64> for FramePoint<F> {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lon, lat)
    }
}

impl<F: Frame> AbsDiffEq for FramePoint<F> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lon.abs_diff_eq(&other.lon, epsilon) && self.lat.abs_diff_eq(&other.lat, epsilon)
    }
}

impl<F: Frame> RelativeEq for FramePoint<F> {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.lon.relative_eq(&other.lon, epsilon, max_relative)
            && self.lat.relative_eq(&other.lat, epsilon, max_relative)
    }
}

impl<F: Frame> From<FramePoint<F>> for GeoPoint2d {
    fn from(point: FramePoint<F>) -> Self {
        GeoPoint2d::lonlat(point.lon, point.lat)
    }
}

impl<F: Frame> fmt::Debug for FramePoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FramePoint")
            .field("frame", &F::KIND)
            .field("lon", &self.lon)
            .field("lat", &self.lat)
            .finish()
    }
}

impl<F: Frame> fmt::Display for FramePoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", F::KIND, self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_relative_eq, assert_relative_ne};

    #[test]
    fn try_new_accepts_valid_range() {
        assert!(WgsPoint::try_new(180.0, 90.0).is_ok());
        assert!(GcjPoint::try_new(-180.0, -90.0).is_ok());
        assert_eq!(
            BdPoint::try_new(116.404, 39.915),
            Ok(BdPoint::new(116.404, 39.915))
        );
    }

    #[test]
    fn try_new_rejects_invalid_coordinates() {
        assert_eq!(
            WgsPoint::try_new(180.5, 0.0),
            Err(ChinaCrsError::InvalidCoordinate { lon: 180.5, lat: 0.0 })
        );
        assert!(WgsPoint::try_new(0.0, -90.1).is_err());
        assert!(WgsPoint::try_new(f64::NAN, 0.0).is_err());
        assert!(WgsPoint::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn relative_comparison() {
        let point = GcjPoint::new(121.47, 31.23);
        assert_relative_eq!(
            point,
            GcjPoint::new(121.470_000_001, 31.23),
            max_relative = 1e-10
        );
        assert_relative_ne!(point, GcjPoint::new(121.48, 31.23), max_relative = 1e-10);
    }

    #[test]
    fn untagged_round_trip() {
        let point = GcjPoint::new(121.47, 31.23);
        let untagged: GeoPoint2d = point.into();
        assert_eq!(untagged.lon(), 121.47);
        assert_eq!(untagged.lat(), 31.23);
        assert_eq!(GcjPoint::from_untagged(untagged), point);
    }

    #[test]
    fn latlon_order() {
        let point = BdPoint::latlon(31.23, 121.47);
        assert_eq!(point.lon(), 121.47);
        assert_eq!(point.lat(), 31.23);
    }

    #[test]
    fn kind_matches_frame() {
        assert_eq!(WgsPoint::default().kind(), FrameKind::Wgs84);
        assert_eq!(GcjPoint::default().kind(), FrameKind::Gcj02);
        assert_eq!(BdPoint::default().kind(), FrameKind::Bd09);
    }

    #[test]
    fn is_in_china() {
        assert!(WgsPoint::new(116.404, 39.915).is_in_china());
        assert!(!WgsPoint::new(2.35, 48.86).is_in_china());
    }

    #[test]
    fn formatting() {
        let point = GcjPoint::new(121.5, 31.25);
        assert_eq!(point.to_string(), "GCJ-02(121.5, 31.25)");
        assert_eq!(
            format!("{point:?}"),
            "FramePoint { frame: Gcj02, lon: 121.5, lat: 31.25 }"
        );
    }

    #[test]
    fn serialization() {
        let point = WgsPoint::new(121.5, 31.25);
        let json = serde_json::to_string(&point).expect("serializable");
        assert_eq!(json, r#"{"lon":121.5,"lat":31.25}"#);

        let restored: WgsPoint = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(restored, point);
    }
}
