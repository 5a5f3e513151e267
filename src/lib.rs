//! # Flyto
//!
//! An embeddable map-camera animation engine.
//!
//! Given a renderer's current view (center + zoom) and a destination scene
//! (an explicit location/zoom or a bounding box to fit), flyto computes a
//! time-parameterized camera path and reports interpolated (zoom, location)
//! samples every frame until completion. Long jumps follow the perceptually
//! smooth van Wijk-Nuij "bow" trajectory that lifts the camera up and back
//! down; short ones interpolate linearly.
//!
//! The engine renders nothing and fetches nothing: the host render loop
//! drives it once per frame and applies the returned camera state.
//!
//! ```
//! use flyto::prelude::*;
//!
//! let mut animator = SceneAnimator::new();
//! let visible = LatLngBounds::from_coords(-5.0, -5.0, 5.0, 5.0);
//!
//! let signal = animator.initialize(
//!     CameraState::new(10.0, LatLng::new(0.0, 0.0)),
//!     &TargetScene::LocationAndZoom { center: LatLng::new(48.8566, 2.3522), zoom: 13.0 },
//!     &ViewContext::default(),
//!     &visible,
//!     1.0,
//!     AnimationKind::Bow,
//! ).unwrap();
//!
//! while !signal.is_complete() {
//!     let frame = animator.update(1.0 / 60.0).unwrap();
//!     // hand frame.zoom / frame.center to the renderer
//! }
//! ```

pub mod animation;
pub mod core;
pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    context::{ViewContext, ViewProbe},
    geo::{LatLng, LatLngBounds, MercatorPoint},
};

pub use crate::animation::{
    completion::CompletionSignal,
    controller::{AnimationKind, CameraFrame, SceneAnimator},
    scene::{CameraState, TargetScene},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, CameraError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("invalid time scale {0}: must be a positive finite number")]
    InvalidTimeScale(f64),

    #[error("degenerate bounding box ({width} x {height} Mercator units)")]
    DegenerateBounds { width: f64, height: f64 },

    #[error("no active animation session: call initialize first")]
    NoActiveSession,
}

/// Error type alias for convenience
pub type Error = CameraError;
