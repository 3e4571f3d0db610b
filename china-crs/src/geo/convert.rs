use crate::geo::bounds::out_of_china;
use crate::geo::impls::{BdPoint, GcjPoint, WgsPoint};
use crate::geo::kernel::shift;
use crate::geo::traits::point::GeoPoint;

/// Angular frequency of BD-09 perturbation, `3000 * PI / 180` rounded once.
const BD_FREQUENCY: f64 = 52.359_877_559_829_89;
const BD_RADIUS_PERTURBATION: f64 = 0.00002;
const BD_ANGLE_PERTURBATION: f64 = 0.000003;
const BD_LON_SHIFT: f64 = 0.0065;
const BD_LAT_SHIFT: f64 = 0.006;

impl WgsPoint {
    /// Converts the point into GCJ-02 frame.
    ///
    /// Points outside of China keep their coordinates.
    pub fn to_gcj(self) -> GcjPoint {
        if out_of_china(&self) {
            return GcjPoint::new(self.lon(), self.lat());
        }

        let shift = shift(&self);
        GcjPoint::new(self.lon() + shift.lon(), self.lat() + shift.lat())
    }

    /// Converts the point into BD-09 frame. Same as `self.to_gcj().to_bd()`.
    pub fn to_bd(self) -> BdPoint {
        self.to_gcj().to_bd()
    }
}

impl GcjPoint {
    /// Converts the point into WGS84 frame.
    ///
    /// The displacement is evaluated at the GCJ-02 point instead of the unknown WGS84 one, so the result is only
    /// an approximation of the exact inverse of [`WgsPoint::to_gcj`], with an error of up to a few meters. This is
    /// how the conversion is commonly done, and the result matches other implementations. Use
    /// [`GcjPoint::to_wgs_precise`] if better precision is needed.
    ///
    /// Points outside of China keep their coordinates.
    pub fn to_wgs(self) -> WgsPoint {
        if out_of_china(&self) {
            return WgsPoint::new(self.lon(), self.lat());
        }

        let shift = shift(&self);
        WgsPoint::new(self.lon() - shift.lon(), self.lat() - shift.lat())
    }

    /// Converts the point into WGS84 frame, refining the result of [`GcjPoint::to_wgs`] until converting it back
    /// to GCJ-02 gives the original point with the `tolerance` (in degrees), or `max_iterations` refinement steps
    /// are done.
    ///
    /// ```
    /// use approx::assert_abs_diff_eq;
    /// use china_crs::GcjPoint;
    ///
    /// let gcj = GcjPoint::new(121.4737, 31.2304);
    /// let wgs = gcj.to_wgs_precise(1e-9, 10);
    /// assert_abs_diff_eq!(wgs.to_gcj(), gcj, epsilon = 1e-9);
    /// ```
    pub fn to_wgs_precise(self, tolerance: f64, max_iterations: usize) -> WgsPoint {
        let mut wgs = self.to_wgs();
        if !self.is_in_china() {
            return wgs;
        }

        for _ in 0..max_iterations {
            let gcj = wgs.to_gcj();
            let dlon = gcj.lon() - self.lon();
            let dlat = gcj.lat() - self.lat();
            if dlon.abs() < tolerance && dlat.abs() < tolerance {
                break;
            }

            wgs = WgsPoint::new(wgs.lon() - dlon, wgs.lat() - dlat);
        }

        wgs
    }

    /// Converts the point into BD-09 frame.
    pub fn to_bd(self) -> BdPoint {
        let lon = self.lon();
        let lat = self.lat();

        let z = (lon * lon + lat * lat).sqrt()
            + BD_RADIUS_PERTURBATION * (lat * BD_FREQUENCY).sin();
        let theta = lat.atan2(lon) + BD_ANGLE_PERTURBATION * (lon * BD_FREQUENCY).cos();

        BdPoint::new(z * theta.cos() + BD_LON_SHIFT, z * theta.sin() + BD_LAT_SHIFT)
    }
}

impl BdPoint {
    /// Converts the point into GCJ-02 frame.
    ///
    /// Unlike GCJ-02 obfuscation, BD-09 is applied to all points regardless of their location.
    pub fn to_gcj(self) -> GcjPoint {
        let lon = self.lon() - BD_LON_SHIFT;
        let lat = self.lat() - BD_LAT_SHIFT;

        let z = (lon * lon + lat * lat).sqrt()
            - BD_RADIUS_PERTURBATION * (lat * BD_FREQUENCY).sin();
        let theta = lat.atan2(lon) - BD_ANGLE_PERTURBATION * (lon * BD_FREQUENCY).cos();

        GcjPoint::new(z * theta.cos(), z * theta.sin())
    }

    /// Converts the point into WGS84 frame. Same as `self.to_gcj().to_wgs()`.
    pub fn to_wgs(self) -> WgsPoint {
        self.to_gcj().to_wgs()
    }
}
