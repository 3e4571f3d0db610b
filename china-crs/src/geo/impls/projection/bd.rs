use crate::geo::impls::{BdPoint, GcjPoint};
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::Projection;

use super::finite_point;

phantom_projection! {
    /// GCJ-02 to BD-09.
    BdProjection<In = GcjPoint, Out = BdPoint>
}

impl<In: NewGeoPoint<f64>, Out: NewGeoPoint<f64>> Projection for BdProjection<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        finite_point(&GcjPoint::new(input.lon(), input.lat()).to_bd())
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        finite_point(&BdPoint::new(input.lon(), input.lat()).to_gcj())
    }
}
