//! Angle helpers.

/// Wrap any finite angle into [0, 360). NaN passes through.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative can round up to 360.0
    if r >= 360.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_unchanged() {
        for deg in [0.0, 0.25, 179.0, 359.75] {
            assert_eq!(normalize_360(deg), deg);
        }
    }

    #[test]
    fn full_turns_removed() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(1090.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-725.0) - 355.0).abs() < 1e-10);
    }

    #[test]
    fn tiny_negative_lands_at_zero() {
        assert_eq!(normalize_360(-1e-20), 0.0);
    }

    #[test]
    fn nan_passes_through() {
        assert!(normalize_360(f64::NAN).is_nan());
    }
}
