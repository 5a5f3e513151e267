use crate::core::geo::{LatLng, MercatorPoint};

/// Interpolation trait for values that can be smoothly transitioned
pub trait Interpolatable {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

/// Main interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two f64 values; `t` is unconstrained,
    /// the caller clamps
    pub fn linear(start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * t
    }
}

/// Cubic smoothstep easing (`3t^2 - 2t^3`), zero-slope at both ends
pub fn smooth_step(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

impl Interpolatable for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Interpolation::linear(*self, *other, t)
    }
}

impl Interpolatable for MercatorPoint {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        MercatorPoint::new(
            Interpolation::linear(self.x, other.x, t),
            Interpolation::linear(self.y, other.y, t),
        )
    }
}

impl Interpolatable for LatLng {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        LatLng::new(
            Interpolation::linear(self.lat, other.lat, t),
            Interpolation::linear(self.lng, other.lng, t),
        )
    }
}
