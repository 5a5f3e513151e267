pub mod constants;
pub mod context;
pub mod geo;
pub mod zoom;

// Re-export commonly used types for convenience
pub use context::{ViewContext, ViewProbe};
pub use geo::{LatLng, LatLngBounds, MercatorPoint};
