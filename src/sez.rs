use nalgebra::{Matrix3, Vector3};

use crate::geodetic;

/// Topocentric South-East-Zenith components in km.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SezVector {
    pub south: f64,
    pub east: f64,
    pub zenith: f64,
}

impl SezVector {
    pub fn range(&self) -> f64 {
        Vector3::new(self.south, self.east, self.zenith).norm()
    }
}

impl From<Vector3<f64>> for SezVector {
    fn from(v: Vector3<f64>) -> Self {
        Self {
            south: v.x,
            east: v.y,
            zenith: v.z,
        }
    }
}

/// ECEF to SEZ rotation at a geodetic latitude/longitude (radians).
///
/// Rows are the south, east and zenith unit vectors expressed in ECEF.
#[rustfmt::skip]
pub fn rotation(lat_rad: f64, lon_rad: f64) -> Matrix3<f64> {
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let (sin_lon, cos_lon) = lon_rad.sin_cos();

    Matrix3::new(
        sin_lat * cos_lon, sin_lat * sin_lon, -cos_lat,
        -sin_lon, cos_lon, 0.0,
        cos_lat * cos_lon, cos_lat * sin_lon, sin_lat,
    )
}

pub fn rotate(displacement: &Vector3<f64>, lat_rad: f64, lon_rad: f64) -> SezVector {
    (rotation(lat_rad, lon_rad) * displacement).into()
}

/// SEZ position of `origin` as seen from `target`, both ECEF in km.
///
/// The frame is anchored at the target's own geodetic latitude and longitude,
/// and the rotated vector is `origin - target`.
pub fn ecef_to_sez(origin: &Vector3<f64>, target: &Vector3<f64>) -> SezVector {
    let solution = geodetic::solve(target);
    log::debug!(
        "target geodetic: lat {:.9}° lon {:.9}° h {:.6} km c_E {:.6} km ({} passes, converged: {})",
        solution.latitude.to_degrees(),
        solution.longitude.to_degrees(),
        solution.height_km,
        solution.radius_of_curvature_km,
        solution.iterations,
        solution.converged
    );

    let displacement = origin - target;
    let sez = rotate(&displacement, solution.latitude, solution.longitude);
    log::debug!("range {:.6} km", sez.range());

    sez
}
