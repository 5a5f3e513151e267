use crate::core::constants::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// Host-supplied view parameters for one animation request.
///
/// Renderers may set custom zoom bounds, so the valid range travels with the
/// request instead of living inside the engine. `local_map_dimension` is the
/// side length of the renderer's viewport in normalized map-local units and
/// is only consulted when resolving bounding-box scenes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewContext {
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
    /// Viewport side length in normalized map-local units
    pub local_map_dimension: f64,
}

impl ViewContext {
    pub fn new(min_zoom: f64, max_zoom: f64, local_map_dimension: f64) -> Self {
        Self {
            min_zoom,
            max_zoom,
            local_map_dimension,
        }
    }

    /// Clamps a zoom level into this context's valid range
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM, 1.0)
    }
}

/// Injected "is this point inside the currently visible map extent" check.
///
/// The exact geometry of the visible extent lives in the renderer, so the
/// engine only consumes the predicate; any reasonable containment test
/// satisfies the contract. Used to downgrade bow flights to linear ones when
/// the destination is already on screen.
pub trait ViewProbe {
    fn current_view_intersects(&self, point: &LatLng) -> bool;
}

impl ViewProbe for LatLngBounds {
    fn current_view_intersects(&self, point: &LatLng) -> bool {
        self.contains(point)
    }
}

impl<F> ViewProbe for F
where
    F: Fn(&LatLng) -> bool,
{
    fn current_view_intersects(&self, point: &LatLng) -> bool {
        self(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_zoom() {
        let context = ViewContext::new(2.0, 15.0, 1.0);
        assert_eq!(context.clamp_zoom(1.0), 2.0);
        assert_eq!(context.clamp_zoom(20.0), 15.0);
        assert_eq!(context.clamp_zoom(10.0), 10.0);
    }

    #[test]
    fn test_bounds_probe() {
        let view = LatLngBounds::from_coords(-10.0, -10.0, 10.0, 10.0);
        assert!(view.current_view_intersects(&LatLng::new(0.0, 0.0)));
        assert!(!view.current_view_intersects(&LatLng::new(20.0, 0.0)));
    }

    #[test]
    fn test_closure_probe() {
        let always = |_: &LatLng| true;
        assert!(always.current_view_intersects(&LatLng::new(50.0, 50.0)));
    }
}
