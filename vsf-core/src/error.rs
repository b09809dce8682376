use thiserror::Error;

/// Depth invariant violations that make a feature unusable in a control law
///
/// Both kinds are unrecoverable at this layer: construction fails outright
/// instead of substituting a clamped depth, and the orchestration layer
/// decides whether to drop the offending point or abort the iteration.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DepthError {
    /// The point lies behind the camera optical center, so the upstream
    /// pose estimate is geometrically invalid for this point.
    #[error("Point behind camera (Z = {0})")]
    BehindCamera(f64),

    /// Depth indistinguishable from zero, typically a degenerate pose or a
    /// point on the camera focal plane.
    #[error("Point depth numerically null (Z = {0})")]
    NearZero(f64),
}

pub type Result<T> = std::result::Result<T, DepthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behind_camera_display() {
        let err = DepthError::BehindCamera(-0.25);
        assert_eq!(err.to_string(), "Point behind camera (Z = -0.25)");
    }

    #[test]
    fn test_near_zero_display() {
        let err = DepthError::NearZero(5e-7);
        assert_eq!(err.to_string(), "Point depth numerically null (Z = 0.0000005)");
    }

    #[test]
    fn test_kinds_are_distinguishable() {
        let behind: DepthError = DepthError::BehindCamera(-1.0);
        let null: DepthError = DepthError::NearZero(0.0);
        assert!(matches!(behind, DepthError::BehindCamera(_)));
        assert!(matches!(null, DepthError::NearZero(_)));
        assert_ne!(behind, null);
    }
}
