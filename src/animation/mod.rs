pub mod completion;
pub mod controller;
pub mod flight;
pub mod interpolation;
pub mod scene;

// Re-export commonly used types and functions for convenience
pub use completion::CompletionSignal;
pub use controller::{AnimationKind, CameraFrame, SceneAnimator};
pub use flight::FlightPath;
pub use interpolation::{smooth_step, Interpolatable, Interpolation};
pub use scene::{CameraState, TargetScene};
