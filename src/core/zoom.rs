//! Zoom-scale conversions.
//!
//! The engine works with an "altitude" proxy for visible map width: at zoom
//! level `z` the camera sees `1 / 2^(z - 1)` of the normalized Mercator
//! plane, so each +1 zoom level halves the visible extent.

/// Visible-width proxy at the given continuous zoom level: `1 / 2^(zoom - 1)`
pub fn altitude(zoom: f64) -> f64 {
    (1.0 - zoom).exp2()
}

/// Inverse of [`altitude`]: `log2(1 / altitude) + 1`
pub fn zoom_from_altitude(altitude: f64) -> f64 {
    1.0 - altitude.log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(altitude(1.0), 1.0);
        assert_eq!(altitude(2.0), 0.5);
        assert_eq!(altitude(11.0), 1.0 / 1024.0);
    }

    #[test]
    fn test_exact_inverses() {
        for step in 0..=210 {
            let zoom = 1.0 + step as f64 * 0.1;
            let back = zoom_from_altitude(altitude(zoom));
            assert!(
                (back - zoom).abs() < 1e-9,
                "round trip failed at zoom {zoom}: got {back}"
            );
        }
    }
}
