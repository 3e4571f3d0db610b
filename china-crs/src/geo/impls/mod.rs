//! Point types and projections implementing the traits of the [`geo`](crate::geo) module.

mod frame;
mod point;
pub mod projection;

pub use frame::{Bd09, BdPoint, Frame, FramePoint, Gcj02, GcjPoint, Wgs84, WgsPoint};
pub use point::GeoPoint2d;
