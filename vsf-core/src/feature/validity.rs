use crate::error::{DepthError, Result};

/// Depth below which a division by Z is numerically unusable
pub const MIN_DEPTH: f64 = 1e-6;

/// Check that a camera-frame depth can safely enter a control computation
///
/// Checks run in physical-severity order, first match wins: a point behind
/// the optical center is reported before a numerically null depth. Invalid
/// depths are never clamped or corrected.
pub fn check_depth(z: f64) -> Result<()> {
    if z < 0.0 {
        return Err(DepthError::BehindCamera(z));
    }
    if z.abs() < MIN_DEPTH {
        return Err(DepthError::NearZero(z));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behind_camera_boundary() {
        assert!(matches!(
            check_depth(-0.001),
            Err(DepthError::BehindCamera(z)) if z == -0.001
        ));
        assert!(check_depth(0.001).is_ok());
    }

    #[test]
    fn test_near_zero_boundary() {
        assert!(matches!(
            check_depth(5e-7),
            Err(DepthError::NearZero(z)) if z == 5e-7
        ));
        assert!(check_depth(2e-6).is_ok());
    }

    #[test]
    fn test_min_depth_itself_is_valid() {
        assert!(check_depth(MIN_DEPTH).is_ok());
    }

    #[test]
    fn test_negative_near_zero_reports_behind_camera() {
        // Severity ordering: "impossible" wins over "numerically unusable".
        assert!(matches!(
            check_depth(-1e-9),
            Err(DepthError::BehindCamera(_))
        ));
    }

    #[test]
    fn test_nominal_depths_pass() {
        for z in [0.05, 1.0, 1.2, 250.0] {
            assert!(check_depth(z).is_ok());
        }
    }
}
