use crate::error::{ProcessingError, Result};
use crate::utils::constants::KM_PER_DEGREE;

/// Convert a cell size in kilometers to degrees using the equatorial
/// approximation (1 degree is about 111 km).
pub fn km_to_degrees(km: f64) -> Result<f64> {
    if !km.is_finite() || km <= 0.0 {
        return Err(ProcessingError::Config(format!(
            "Cell size must be a positive number of kilometers, got: {}",
            km
        )));
    }
    Ok(km / KM_PER_DEGREE)
}

/// Calculate the distance between two points using the Haversine formula
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// True east-west ground span of a cell of `size_deg` degrees at `lat`.
/// Reported so users can see how far the equatorial approximation drifts.
pub fn cell_ground_width_km(lat: f64, size_deg: f64) -> f64 {
    haversine_distance(lat, 0.0, lat, size_deg)
}
