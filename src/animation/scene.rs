use crate::core::constants::BOUNDS_FIT_MARGIN;
use crate::core::context::ViewContext;
use crate::core::geo::{LatLng, LatLngBounds};
use crate::core::zoom;
use crate::{CameraError, Result};
use serde::{Deserialize, Serialize};

/// A map camera pose: continuous zoom level plus geographic center.
///
/// Zoom is a real number where each +1 doubles linear map scale. The host
/// renderer owns its long-lived camera state; the engine only reads start
/// states and returns new ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub zoom: f64,
    pub center: LatLng,
}

impl CameraState {
    pub fn new(zoom: f64, center: LatLng) -> Self {
        Self { zoom, center }
    }
}

/// A destination camera request
#[derive(Debug, Clone, PartialEq)]
pub enum TargetScene {
    /// Explicit destination center and zoom level
    LocationAndZoom { center: LatLng, zoom: f64 },
    /// A geographic rectangle the destination view must fully contain
    BoundingBox(LatLngBounds),
}

impl TargetScene {
    /// Resolves the scene to a concrete destination camera state.
    ///
    /// Explicit destinations only have their zoom clamped into the context's
    /// bounds. Bounding boxes resolve to the box center and the zoom at
    /// which the box exactly fills the viewport's local map dimension on its
    /// tighter axis, plus one level of margin, clamped last so the margin
    /// survives at the zoom extremes.
    pub fn resolve(&self, context: &ViewContext) -> Result<CameraState> {
        match self {
            TargetScene::LocationAndZoom { center, zoom } => {
                Ok(CameraState::new(context.clamp_zoom(*zoom), *center))
            }
            TargetScene::BoundingBox(bounds) => {
                let sw = bounds.south_west.to_mercator();
                let ne = bounds.north_east.to_mercator();
                let width = (ne.x - sw.x).abs();
                let height = (sw.y - ne.y).abs();
                if width <= 0.0 || height <= 0.0 {
                    return Err(CameraError::DegenerateBounds { width, height });
                }

                let dimension = context.local_map_dimension;
                let zoom_x = zoom::zoom_from_altitude(width / dimension);
                let zoom_y = zoom::zoom_from_altitude(height / dimension);
                let zoom = context.clamp_zoom(zoom_x.min(zoom_y) + BOUNDS_FIT_MARGIN);

                Ok(CameraState::new(zoom, bounds.center()))
            }
        }
    }
}
