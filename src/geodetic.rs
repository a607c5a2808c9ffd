use nalgebra::Vector3;

use crate::ellipsoid::{radius_of_curvature, E_E};

/// Upper bound on latitude refinement passes.
pub const MAX_ITERATIONS: usize = 5;

/// Latitude change (radians) below which the refinement is considered settled.
pub const CONVERGENCE_TOLERANCE_RAD: f64 = 1e-6;

#[derive(Debug, Clone, Copy)]
pub struct GeodeticSolution {
    pub latitude: f64,  // radians
    pub longitude: f64, // radians
    /// Prime-vertical radius of curvature from the last pass (km)
    pub radius_of_curvature_km: f64,
    pub height_km: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Solve geodetic latitude and longitude for an ECEF position in km.
///
/// Longitude is closed-form. Latitude starts from the geocentric (spherical)
/// value and is refined by fixed-point iteration until two successive values
/// differ by no more than [`CONVERGENCE_TOLERANCE_RAD`], or until
/// [`MAX_ITERATIONS`] passes have run. Failing to converge is not an error;
/// the last latitude is returned.
///
/// The position must not be the Earth's center. Degenerate input is not
/// rejected and yields NaN or infinite components.
pub fn solve(position_km: &Vector3<f64>) -> GeodeticSolution {
    let (x, y, z) = (position_km.x, position_km.y, position_km.z);

    let longitude = y.atan2(x);

    let mut latitude = (z / position_km.norm()).asin();
    let r_lon = (x * x + y * y).sqrt();

    // Only a real latitude counts as a previous value to compare against
    let mut previous: Option<f64> = None;
    let mut c_e = f64::NAN;
    let mut iterations = 0;

    while iterations < MAX_ITERATIONS
        && previous.map_or(true, |prev| (latitude - prev).abs() > CONVERGENCE_TOLERANCE_RAD)
    {
        c_e = radius_of_curvature(latitude);
        previous = Some(latitude).filter(|lat| !lat.is_nan());
        latitude = ((z + c_e * E_E.powi(2) * latitude.sin()) / r_lon).atan();
        iterations += 1;

        log::trace!(
            "latitude pass {}: {:.12} rad (c_E {:.6} km)",
            iterations,
            latitude,
            c_e
        );
    }

    let converged =
        previous.is_some_and(|prev| (latitude - prev).abs() <= CONVERGENCE_TOLERANCE_RAD);
    let height_km = r_lon / latitude.cos() - c_e;

    GeodeticSolution {
        latitude,
        longitude,
        radius_of_curvature_km: c_e,
        height_km,
        iterations,
        converged,
    }
}
