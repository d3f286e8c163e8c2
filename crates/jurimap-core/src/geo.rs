//! Geographic primitives: validated coordinates, great-circle distance, and
//! the immutable search origin produced by geocoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean Earth radius in kilometres (IUGG).
const EARTH_RADIUS_KM: f64 = 6_371.008_8;

/// Errors raised when constructing a [`Coordinate`] from raw values.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A latitude/longitude pair in decimal degrees.
///
/// Construct via [`Coordinate::new`] to enforce the valid ranges; values
/// deserialized from external sources should be re-validated the same way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting values outside the valid ranges.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::LatitudeOutOfRange`] or
    /// [`GeoError::LongitudeOutOfRange`] for out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Great-circle distance between two coordinates in kilometres, via the
/// haversine formula on a mean-radius sphere.
#[must_use]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// The resolved starting point of a search: the coordinate the geocoder
/// matched, the free-text query that produced it, and the canonical display
/// address. Created once per search submission and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOrigin {
    pub coordinate: Coordinate,
    pub query: String,
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_accepts_valid_ranges() {
        assert!(Coordinate::new(20.2961, 85.8245).is_ok());
        assert!(Coordinate::new(-90.0, 180.0).is_ok());
        assert!(Coordinate::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn coordinate_rejects_out_of_range_latitude() {
        let err = Coordinate::new(90.5, 0.0).unwrap_err();
        assert!(matches!(err, GeoError::LatitudeOutOfRange(_)));
    }

    #[test]
    fn coordinate_rejects_out_of_range_longitude() {
        let err = Coordinate::new(0.0, -180.01).unwrap_err();
        assert!(matches!(err, GeoError::LongitudeOutOfRange(_)));
    }

    #[test]
    fn haversine_zero_for_identical_points() {
        let p = Coordinate::new(20.2961, 85.8245).unwrap();
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn haversine_one_degree_longitude_at_equator() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(0.0, 1.0).unwrap();
        let d = haversine_km(a, b);
        // One degree of longitude at the equator is ~111.195 km.
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = Coordinate::new(20.2961, 85.8245).unwrap();
        let b = Coordinate::new(20.4625, 85.8830).unwrap();
        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        assert!((ab - ba).abs() < 1e-9);
        // Bhubaneswar to Cuttack is roughly 19–20 km.
        assert!(ab > 15.0 && ab < 25.0, "got {ab}");
    }
}
