//! Geodesic distances and road costs

use crate::network::City;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two cities (haversine formula)
pub fn haversine_km(a: &City, b: &City) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Edge cost for a road of `km` kilometres: rounded, never below 1
pub fn road_cost(km: f64) -> u32 {
    if !km.is_finite() {
        return 1;
    }
    (km.round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: &str, lat: f64, lon: f64) -> City {
        City {
            id: id.to_string(),
            lat,
            lon,
        }
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let a = city("A", 31.5, 74.3);
        assert_eq!(haversine_km(&a, &a), 0.0);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let a = city("A", 0.0, 0.0);
        let b = city("B", 1.0, 0.0);
        // 2 * pi * 6371 / 360
        assert!((haversine_km(&a, &b) - 111.195).abs() < 0.01);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let karachi = city("Karachi", 24.8607, 67.0011);
        let lahore = city("Lahore", 31.5204, 74.3587);
        let d1 = haversine_km(&karachi, &lahore);
        let d2 = haversine_km(&lahore, &karachi);
        assert!((d1 - d2).abs() < 1e-9);
        assert!(d1 > 950.0 && d1 < 1100.0);
    }

    #[test]
    fn test_road_cost_rounds_and_clamps() {
        assert_eq!(road_cost(123.4), 123);
        assert_eq!(road_cost(123.5), 124);
        assert_eq!(road_cost(0.2), 1);
        assert_eq!(road_cost(0.0), 1);
        assert_eq!(road_cost(f64::NAN), 1);
    }
}
