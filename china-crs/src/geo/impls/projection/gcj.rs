use crate::geo::impls::{GcjPoint, WgsPoint};
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::Projection;

use super::finite_point;

phantom_projection! {
    /// WGS84 to GCJ-02. `unproject` is the single-pass [`GcjPoint::to_wgs`].
    GcjProjection<In = WgsPoint, Out = GcjPoint>
}

impl<In: NewGeoPoint<f64>, Out: NewGeoPoint<f64>> Projection for GcjProjection<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        finite_point(&WgsPoint::new(input.lon(), input.lat()).to_gcj())
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        finite_point(&GcjPoint::new(input.lon(), input.lat()).to_wgs())
    }
}
