// Reference ellipsoid parameters (WGS84 equatorial radius and first eccentricity)
pub const R_E_KM: f64 = 6378.137; // equatorial radius (km)
pub const E_E: f64 = 0.081819221456; // first eccentricity

/// Radius of curvature in the prime vertical at the given geodetic latitude.
pub fn radius_of_curvature(lat_rad: f64) -> f64 {
    R_E_KM / denom(lat_rad)
}

fn denom(lat_rad: f64) -> f64 {
    (1.0 - E_E.powi(2) * lat_rad.sin().powi(2)).sqrt()
}
