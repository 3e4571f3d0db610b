use geo_types::{coord, Coord, CoordFloat};

use crate::geo::{GeoPoint, NewGeoPoint};

impl<T: CoordFloat> GeoPoint for Coord<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y
    }

    fn lon(&self) -> Self::Num {
        self.x
    }
}

impl<T: CoordFloat> NewGeoPoint<T> for Coord<T> {
    fn latlon(lat: T, lon: T) -> Self {
        coord!(x: lon, y: lat)
    }
}
