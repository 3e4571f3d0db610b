use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChinaCrsError;
use crate::geo::impls::{BdPoint, GcjPoint, GeoPoint2d, WgsPoint};

/// Coordinate frame selected at runtime.
///
/// Statically known frames should use the [`FramePoint`](crate::FramePoint) types instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    /// WGS84, raw GPS coordinates.
    Wgs84,
    /// GCJ-02, national obfuscated coordinates.
    Gcj02,
    /// BD-09, Baidu coordinates.
    Bd09,
}

impl FrameKind {
    /// Human readable name of the frame.
    pub fn name(&self) -> &'static str {
        match self {
            FrameKind::Wgs84 => "WGS84",
            FrameKind::Gcj02 => "GCJ-02",
            FrameKind::Bd09 => "BD-09",
        }
    }

    /// Converts coordinates of the point from this frame into the frame `to`.
    ///
    /// Conversions between WGS84 and BD-09 go through GCJ-02, giving exactly the same result as
    /// [`WgsPoint::to_bd`] and [`BdPoint::to_wgs`].
    ///
    /// ```
    /// use china_crs::{lonlat, FrameKind, GeoPoint, WgsPoint};
    ///
    /// let point = lonlat!(116.404, 39.915);
    /// let converted = FrameKind::Wgs84.transform(FrameKind::Bd09, point);
    /// let expected = WgsPoint::new(116.404, 39.915).to_bd();
    ///
    /// assert_eq!(converted.lon(), expected.lon());
    /// assert_eq!(converted.lat(), expected.lat());
    /// ```
    pub fn transform(self, to: FrameKind, point: GeoPoint2d) -> GeoPoint2d {
        if self == to {
            return point;
        }

        log::trace!("Converting {point:?} from {self} to {to}");

        let gcj = match self {
            FrameKind::Wgs84 => WgsPoint::from_untagged(point).to_gcj(),
            FrameKind::Gcj02 => GcjPoint::from_untagged(point),
            FrameKind::Bd09 => BdPoint::from_untagged(point).to_gcj(),
        };

        match to {
            FrameKind::Wgs84 => gcj.to_wgs().into(),
            FrameKind::Gcj02 => gcj.into(),
            FrameKind::Bd09 => gcj.to_bd().into(),
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrameKind {
    type Err = ChinaCrsError;

    /// Parses frame names like `wgs84`, `GCJ-02` or `bd09`, ignoring case, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "wgs84" | "wgs" => Ok(FrameKind::Wgs84),
            "gcj02" | "gcj" => Ok(FrameKind::Gcj02),
            "bd09" | "bd" => Ok(FrameKind::Bd09),
            _ => Err(ChinaCrsError::UnknownFrame(s.to_string())),
        }
    }
}
