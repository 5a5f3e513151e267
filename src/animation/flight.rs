//! Closed-form zoom-and-pan flight model after van Wijk & Nuij,
//! "Smooth and efficient zooming and panning" (InfoVis 2003).
//!
//! A flight is parameterized by arclength `s` in [0, S]. At every `s` the
//! model yields a visible-width proxy `w` (which maps back to a zoom level)
//! and a pan fraction `u` in [0, 1] along the straight Mercator segment
//! between the endpoints. The bow height constant trades pan speed against
//! how far the camera pulls up mid-flight.

use crate::core::constants::{BOW_HEIGHT, SPEED_FACTOR};
use crate::core::geo::MercatorPoint;
use crate::core::zoom;

/// Precomputed coefficients for one zoom-and-pan flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightPath {
    w0: f64,
    w1: f64,
    u1: f64,
    r0: f64,
    r1: f64,
    /// Total arclength of the flight
    arclength: f64,
    /// Set when start and end centers coincide (pure zoom)
    pure_zoom: bool,
}

impl FlightPath {
    /// Derives the flight coefficients between two camera poses.
    ///
    /// When the Mercator travel distance is exactly zero the general
    /// coefficients are undefined (they divide by the distance), so the
    /// pure-zoom branch computes the arclength directly from the zoom ratio
    /// and never evaluates them.
    pub fn between(
        start_zoom: f64,
        end_zoom: f64,
        start: &MercatorPoint,
        end: &MercatorPoint,
    ) -> Self {
        let rho = BOW_HEIGHT;
        let w0 = zoom::altitude(start_zoom);
        let w1 = zoom::altitude(end_zoom);
        let u0 = 0.0;
        let u1 = start.distance_to(end);

        if u1 == u0 {
            return Self {
                w0,
                w1,
                u1,
                // Placeholders, unused on the pure-zoom path
                r0: 0.0,
                r1: 1.0,
                arclength: (w1 / w0).ln().abs() / rho,
                pure_zoom: true,
            };
        }

        let b = |i: u32, w_i: f64| -> f64 {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            (w1 * w1 - w0 * w0 + sign * rho.powi(4) * (u1 - u0).powi(2))
                / (2.0 * w_i * rho * rho * (u1 - u0))
        };
        let r = |b_i: f64| (-b_i + (b_i * b_i + 1.0).sqrt()).ln();

        let r0 = r(b(0, w0));
        let r1 = r(b(1, w1));

        Self {
            w0,
            w1,
            u1,
            r0,
            r1,
            arclength: (r1 - r0) / rho,
            pure_zoom: false,
        }
    }

    /// Total arclength `S` of the flight
    pub fn arclength(&self) -> f64 {
        self.arclength
    }

    /// Flight duration in seconds before reshaping, `S / (0.75 * time_scale)`
    pub fn duration(&self, time_scale: f64) -> f64 {
        self.arclength / (SPEED_FACTOR * time_scale)
    }

    /// Samples the flight at arclength `s`, returning the zoom level and the
    /// pan fraction along the start-to-end Mercator segment.
    pub fn sample(&self, s: f64) -> (f64, f64) {
        let rho = BOW_HEIGHT;
        let s = s.max(0.0);

        if self.pure_zoom {
            // Degenerate hyperbola: exponential zoom in place.
            let direction = if self.w1 < self.w0 { -1.0 } else { 1.0 };
            let w = self.w0 * (direction * rho * s).exp();
            return (zoom::zoom_from_altitude(w), 1.0);
        }

        let w = self.w0 * self.r0.cosh() / (rho * s + self.r0).cosh();
        let u = (self.w0 / (rho * rho)) * self.r0.cosh() * (rho * s + self.r0).tanh()
            - (self.w0 / (rho * rho)) * self.r0.sinh();
        let u = (u / self.u1).clamp(0.0, 1.0);

        (zoom::zoom_from_altitude(w), u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn flight(start_zoom: f64, end_zoom: f64, end_lng: f64) -> FlightPath {
        let start = LatLng::new(0.0, 0.0).to_mercator();
        let end = LatLng::new(0.0, end_lng).to_mercator();
        FlightPath::between(start_zoom, end_zoom, &start, &end)
    }

    #[test]
    fn test_pure_zoom_arclength() {
        let path = flight(4.0, 8.0, 0.0);
        let w0 = zoom::altitude(4.0);
        let w1 = zoom::altitude(8.0);
        let expected = (w1 / w0).ln().abs() / BOW_HEIGHT;
        assert!((path.arclength() - expected).abs() < 1e-12);
        assert!(path.arclength().is_finite());
    }

    #[test]
    fn test_pure_zoom_sampling_hits_endpoints() {
        let path = flight(4.0, 8.0, 0.0);
        let (start_zoom, _) = path.sample(0.0);
        let (end_zoom, _) = path.sample(path.arclength());
        assert!((start_zoom - 4.0).abs() < 1e-9);
        assert!((end_zoom - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_flight_starts_and_ends_exactly() {
        let path = flight(10.0, 12.0, 40.0);
        let (zoom_at_start, u_at_start) = path.sample(0.0);
        let (zoom_at_end, u_at_end) = path.sample(path.arclength());

        assert!((zoom_at_start - 10.0).abs() < 1e-6);
        assert!(u_at_start.abs() < 1e-6);
        assert!((zoom_at_end - 12.0).abs() < 1e-6);
        assert!((u_at_end - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_bow_pulls_the_camera_up() {
        // A long pan between identical zoom levels must zoom out mid-flight.
        let path = flight(12.0, 12.0, 120.0);
        let (mid_zoom, mid_u) = path.sample(path.arclength() / 2.0);
        assert!(mid_zoom < 12.0);
        assert!(mid_u > 0.0 && mid_u < 1.0);
    }

    #[test]
    fn test_pan_fraction_is_monotonic() {
        let path = flight(8.0, 14.0, 35.0);
        let steps = 64;
        let mut previous = -1.0;
        for i in 0..=steps {
            let s = path.arclength() * i as f64 / steps as f64;
            let (zoom, u) = path.sample(s);
            assert!(zoom.is_finite());
            assert!(u >= previous, "pan fraction regressed at step {i}");
            previous = u;
        }
    }

    #[test]
    fn test_duration_scales_with_speed() {
        let path = flight(6.0, 6.0, 90.0);
        assert!((path.duration(2.0) - path.duration(1.0) / 2.0).abs() < 1e-12);
    }
}
