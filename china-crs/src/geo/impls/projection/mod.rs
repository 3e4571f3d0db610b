//! Conversions between the frames, implemented as [`Projection`](crate::geo::Projection)s.
//!
//! Projections are generic over input and output point types, so they can convert points of any type implementing
//! [`NewGeoPoint`], not only [`FramePoint`](crate::FramePoint)s. Non-finite results are returned as `None`.

macro_rules! phantom_projection {
    ($(#[$meta:meta])* $name:ident<In = $in:ty, Out = $out:ty>) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone)]
        pub struct $name<In = $in, Out = $out> {
            phantom_in: ::std::marker::PhantomData<In>,
            phantom_out: ::std::marker::PhantomData<Out>,
        }

        impl<In, Out> $name<In, Out> {
            /// Creates a new projection.
            pub fn new() -> Self {
                Self {
                    phantom_in: ::std::marker::PhantomData,
                    phantom_out: ::std::marker::PhantomData,
                }
            }
        }

        impl<In, Out> Default for $name<In, Out> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

mod bd;
mod gcj;

pub use bd::BdProjection;
pub use gcj::GcjProjection;

use crate::geo::impls::{BdPoint, GcjPoint, WgsPoint};
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::ChainProjection;

/// Projection from WGS84 into BD-09 frame, going through GCJ-02.
pub type WgsToBdProjection<In = WgsPoint, Out = BdPoint> =
    ChainProjection<GcjProjection<In, GcjPoint>, BdProjection<GcjPoint, Out>>;

impl<In, Out> WgsToBdProjection<In, Out> {
    /// Creates a new WGS84 to BD-09 projection.
    pub fn wgs_to_bd() -> Self {
        ChainProjection::new(GcjProjection::new(), BdProjection::new())
    }
}

fn finite_point<P: NewGeoPoint<f64>>(point: &impl GeoPoint<Num = f64>) -> Option<P> {
    if !point.is_finite() {
        log::trace!(
            "Conversion result is not finite: lon = {}, lat = {}",
            point.lon(),
            point.lat()
        );
        return None;
    }

    Some(P::latlon(point.lat(), point.lon()))
}
