/// Reference ellipsoid parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
    eccentricity_sq: f64,
}

impl Datum {
    /// Krasovsky 1940 ellipsoid. GCJ-02 offsets are scaled with it.
    pub const KRASOVSKY_1940: Self = Datum {
        semimajor: 6_378_245.0,
        eccentricity_sq: 0.006_693_421_622_965_943_23,
    };

    /// Semi-major axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// First eccentricity squared.
    pub fn eccentricity_sq(&self) -> f64 {
        self.eccentricity_sq
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::KRASOVSKY_1940
    }
}
