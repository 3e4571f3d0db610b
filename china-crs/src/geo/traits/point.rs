use num_traits::Float;

/// Point on the surface of the Earth, given by longitude and latitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Returns true if both coordinates are finite numbers.
    fn is_finite(&self) -> bool {
        self.lat().is_finite() && self.lon().is_finite()
    }
}

/// Geographic point that can be constructed from its coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a point from longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}
