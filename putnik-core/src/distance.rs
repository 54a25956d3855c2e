//! Great-circle distance between attractions.
//!
//! Coordinates are WGS84 degrees with `x = longitude`, `y = latitude`.
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]; that matches the estimates shown in the product,
//! so the radius is pinned here rather than taken from a geodesy library.

use geo::Coord;

use crate::Attraction;

/// Earth radius used for distance estimates, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometres.
///
/// Symmetric in its arguments and zero for identical points.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use putnik_core::haversine_km;
///
/// let rostov = Coord { x: 39.7015, y: 47.2357 };
/// let azov = Coord { x: 39.4243, y: 47.1121 };
/// let d = haversine_km(rostov, azov);
/// assert!((d - haversine_km(azov, rostov)).abs() < 1e-9);
/// assert!(d > 20.0 && d < 30.0);
/// ```
#[must_use]
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance between two attractions, in kilometres.
///
/// Returns `None` (unknown, not zero) when either side lacks
/// coordinates. Callers summing distances decide how to fold the unknown
/// case; see [`crate::RouteSummary`].
#[must_use]
pub fn distance_km(from: &Attraction, to: &Attraction) -> Option<f64> {
    match (from.location, to.location) {
        (Some(a), Some(b)) => Some(haversine_km(a, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn distance_is_zero_for_identical_points() {
        let p = Coord { x: 39.7, y: 47.2 };
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn distance_unknown_without_coordinates() {
        let located = Attraction::new("a", "A", "X", Category::Park, 0.0).with_location(47.2, 39.7);
        let unlocated = Attraction::new("b", "B", "X", Category::Park, 0.0);
        assert_eq!(distance_km(&located, &unlocated), None);
        assert_eq!(distance_km(&unlocated, &located), None);
        assert!(distance_km(&located, &located).is_some());
    }
}
