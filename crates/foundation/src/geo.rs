/// Mean Earth radius used for facility distances (kilometres).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic position in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Great-circle distance on a spherical Earth (haversine).
    pub fn distance_km(&self, other: LatLng) -> f64 {
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();
        let a = (dlat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::LatLng;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = LatLng::new(37.50, 127.03);
        assert_close(p.distance_km(p), 0.0, 1e-12);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = LatLng::new(0.0, 0.0);
        let b = LatLng::new(1.0, 0.0);
        assert_close(a.distance_km(b), 111.19, 0.01);
    }

    #[test]
    fn distance_is_symmetric() {
        let seoul = LatLng::new(37.5665, 126.9780);
        let incheon = LatLng::new(37.4563, 126.7052);
        assert_close(seoul.distance_km(incheon), incheon.distance_km(seoul), 1e-9);
        assert!(seoul.distance_km(incheon) > 20.0 && seoul.distance_km(incheon) < 30.0);
    }

    #[test]
    fn non_finite_coordinates_are_detected() {
        assert!(LatLng::new(37.0, 127.0).is_finite());
        assert!(!LatLng::new(f64::NAN, 127.0).is_finite());
        assert!(!LatLng::new(37.0, f64::INFINITY).is_finite());
    }
}
