use crate::core::constants::MAX_LATITUDE;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Represents a geographical coordinate with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the Mercator-projectable range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Projects to normalized spherical Mercator coordinates.
    ///
    /// The full globe maps to the unit square: x in [0, 1] west to east,
    /// y in [0, 1] north to south. Latitudes must stay strictly inside the
    /// Mercator domain (the poles are singular).
    pub fn to_mercator(&self) -> MercatorPoint {
        let lat_rad = self.lat.to_radians();
        let x = (self.lng + 180.0) / 360.0;
        let y = 0.5 - (PI / 4.0 + lat_rad / 2.0).tan().ln() / (2.0 * PI);
        MercatorPoint::new(x, y)
    }

    /// Creates a LatLng from normalized Mercator coordinates
    pub fn from_mercator(point: MercatorPoint) -> Self {
        let lng = point.x * 360.0 - 180.0;
        let lat = (2.0 * (PI * (1.0 - 2.0 * point.y)).exp().atan() - PI / 2.0).to_degrees();
        Self::new(lat, lng)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A point on the normalized Mercator plane ([0, 1] x [0, 1] for the full globe)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MercatorPoint {
    pub x: f64,
    pub y: f64,
}

impl MercatorPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Planar Euclidean distance in Mercator units
    pub fn distance_to(&self, other: &MercatorPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Unprojects back to geographical coordinates
    pub fn to_lat_lng(&self) -> LatLng {
        LatLng::from_mercator(*self)
    }
}

impl Default for MercatorPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Gets the span of the bounds as (lat extent, lng extent) in degrees
    pub fn span(&self) -> LatLng {
        LatLng::new(
            self.north_east.lat - self.south_west.lat,
            self.north_east.lng - self.south_west.lng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(40.7128, -74.0060);
        assert_eq!(coord.lat, 40.7128);
        assert_eq!(coord.lng, -74.0060);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_wrap_lng() {
        assert_eq!(LatLng::wrap_lng(190.0), -170.0);
        assert_eq!(LatLng::wrap_lng(-190.0), 170.0);
        assert_eq!(LatLng::wrap_lng(45.0), 45.0);
    }

    #[test]
    fn test_mercator_unit_square() {
        // The Mercator cut-off latitude corresponds to the edges of the
        // unit square, the equator/prime-meridian to its center.
        let center = LatLng::new(0.0, 0.0).to_mercator();
        assert!((center.x - 0.5).abs() < 1e-12);
        assert!((center.y - 0.5).abs() < 1e-12);

        let nw = LatLng::new(MAX_LATITUDE, -180.0).to_mercator();
        assert!(nw.x.abs() < 1e-9);
        assert!(nw.y.abs() < 1e-9);
    }

    #[test]
    fn test_mercator_round_trip() {
        let original = LatLng::new(40.7128, -74.0060);
        let back = original.to_mercator().to_lat_lng();
        assert!((back.lat - original.lat).abs() < 1e-9);
        assert!((back.lng - original.lng).abs() < 1e-9);
    }

    #[test]
    fn test_mercator_distance() {
        let a = MercatorPoint::new(0.25, 0.5);
        let b = MercatorPoint::new(0.25, 0.75);
        assert!((a.distance_to(&b) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::from_coords(40.0, -75.0, 41.0, -73.0);
        let point_inside = LatLng::new(40.5, -74.0);
        let point_outside = LatLng::new(42.0, -74.0);

        assert!(bounds.contains(&point_inside));
        assert!(!bounds.contains(&point_outside));
    }

    #[test]
    fn test_bounds_center() {
        let bounds = LatLngBounds::from_coords(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bounds.center(), LatLng::new(20.0, 30.0));
    }
}
