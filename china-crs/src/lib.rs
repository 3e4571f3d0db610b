//! Conversions between the geographic coordinate frames used for mapping in China:
//!
//! * **WGS84** ([`WgsPoint`]) - raw GPS coordinates;
//! * **GCJ-02** ([`GcjPoint`]) - the national obfuscated frame, required for public maps of mainland China;
//! * **BD-09** ([`BdPoint`]) - Baidu's frame, layered on top of GCJ-02.
//!
//! All three point types have the same layout, but they are distinct types, so a point in one frame cannot be used
//! where another frame is expected without an explicit conversion:
//!
//! ```
//! use china_crs::{GeoPoint, WgsPoint};
//!
//! let gps = WgsPoint::new(116.404, 39.915);
//! let amap = gps.to_gcj();
//! let baidu = gps.to_bd();
//!
//! assert!(amap.lon() > gps.lon());
//! assert_eq!(baidu, amap.to_bd());
//! ```
//!
//! Obfuscation is only defined inside a bounding box around mainland China (see [`geo::out_of_china`]). Outside of
//! it WGS84 and GCJ-02 coordinates are identical.
//!
//! When the frame is only known at runtime, use [`FrameKind::transform`]. The same conversions are also available
//! through the [`Projection`](geo::Projection) trait, which works with any point type implementing
//! [`NewGeoPoint`], including `geo_types` points when the `geo-types` feature is enabled.

pub mod error;
pub mod geo;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use error::ChinaCrsError;
pub use geo::impls::{
    Bd09, BdPoint, Frame, FramePoint, Gcj02, GcjPoint, GeoPoint2d, Wgs84, WgsPoint,
};
pub use geo::{FrameKind, GeoPoint, NewGeoPoint};
