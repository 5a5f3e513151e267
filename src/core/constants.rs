//! Engine-wide tuned constants.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Bow height parameter (rho in the van Wijk-Nuij formulation). Controls how
/// far the camera lifts during a combined zoom-and-pan flight.
pub const BOW_HEIGHT: f64 = 1.42;

/// Base flight speed multiplier; the effective speed is
/// `SPEED_FACTOR * time_scale`.
pub const SPEED_FACTOR: f64 = 0.75;

/// Normalization constant for the cube-root duration reshaping
/// (`((d / 6)^(1/3)) * 6`), which compresses long flights and stretches
/// very short ones.
pub const DURATION_NORMALIZATION: f64 = 6.0;

/// Extra zoom-out applied when fitting a bounding box, so the box does not
/// touch the viewport edges.
pub const BOUNDS_FIT_MARGIN: f64 = 1.0;

/// Default minimum zoom level when the host supplies no custom bounds.
pub const DEFAULT_MIN_ZOOM: f64 = 1.0;

/// Default maximum zoom level when the host supplies no custom bounds.
pub const DEFAULT_MAX_ZOOM: f64 = 22.0;

/// Latitude at which the square Web-Mercator world plane is cut off.
pub const MAX_LATITUDE: f64 = 85.0511287798;
