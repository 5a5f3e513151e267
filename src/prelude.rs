//! Prelude module for common flyto types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use flyto::prelude::*;`

pub use crate::core::{
    context::{ViewContext, ViewProbe},
    geo::{LatLng, LatLngBounds, MercatorPoint},
    zoom::{altitude, zoom_from_altitude},
};

pub use crate::animation::{
    completion::CompletionSignal,
    controller::{AnimationKind, CameraFrame, SceneAnimator},
    interpolation::Interpolatable,
    scene::{CameraState, TargetScene},
};

pub use crate::{CameraError, Result};
