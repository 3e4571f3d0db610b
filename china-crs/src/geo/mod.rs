//! Geographic points tagged with their coordinate frame (see [`FramePoint`](impls::FramePoint)) and conversions
//! between WGS84, GCJ-02 and BD-09 frames.

mod bounds;
mod convert;
mod crs;
mod datum;
pub mod impls;
pub mod kernel;
mod traits;

pub use bounds::{out_of_china, GeoRect};
pub use crs::FrameKind;
pub use datum::Datum;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::{ChainProjection, InvertedProjection, Projection};
