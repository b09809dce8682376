use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use super::distortion::DistortionModel;

/// Intrinsic calibration mapping pixel coordinates to normalized metric
/// image-plane coordinates
///
/// Supplied by an external calibration-loading component and treated as
/// read-only here. Every conversion borrows it; nothing in this layer
/// mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    fx: f64,
    fy: f64,
    cx: f64,
    cy: f64,
    distortion: DistortionModel,
}

impl CameraIntrinsics {
    /// Create ideal pinhole intrinsics with no distortion
    pub fn new(fx: f64, fy: f64, cx: f64, cy: f64) -> Self {
        Self {
            fx,
            fy,
            cx,
            cy,
            distortion: DistortionModel::None,
        }
    }

    /// Create intrinsics with radial distortion coefficients
    ///
    /// `kud` corrects when projecting metric coordinates to pixels, `kdu`
    /// when normalizing pixels back to metric coordinates.
    pub fn with_distortion(fx: f64, fy: f64, cx: f64, cy: f64, kud: f64, kdu: f64) -> Self {
        Self {
            fx,
            fy,
            cx,
            cy,
            distortion: DistortionModel::Radial { kud, kdu },
        }
    }

    /// Get focal lengths
    pub fn focal_length(&self) -> (f64, f64) {
        (self.fx, self.fy)
    }

    /// Get principal point
    pub fn principal_point(&self) -> (f64, f64) {
        (self.cx, self.cy)
    }

    /// Get the distortion model
    pub fn distortion(&self) -> &DistortionModel {
        &self.distortion
    }

    /// The calibration matrix K of the linear part of the model
    #[rustfmt::skip]
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.fx, 0.0,     self.cx,
            0.0,     self.fy, self.cy,
            0.0,     0.0,     1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focal_length() {
        let cam = CameraIntrinsics::new(1234.5, 1234.6, 960.0, 540.0);
        let (fx, fy) = cam.focal_length();
        assert_eq!(fx, 1234.5);
        assert_eq!(fy, 1234.6);
    }

    #[test]
    fn test_principal_point() {
        let cam = CameraIntrinsics::new(1000.0, 1000.0, 960.5, 540.3);
        let (cx, cy) = cam.principal_point();
        assert_eq!(cx, 960.5);
        assert_eq!(cy, 540.3);
    }

    #[test]
    fn test_new_has_no_distortion() {
        let cam = CameraIntrinsics::new(600.0, 600.0, 320.0, 240.0);
        assert_eq!(*cam.distortion(), DistortionModel::None);
    }

    #[test]
    fn test_with_distortion_stores_coefficients() {
        let cam = CameraIntrinsics::with_distortion(600.0, 600.0, 320.0, 240.0, -0.2, 0.2);
        match cam.distortion() {
            DistortionModel::Radial { kud, kdu } => {
                assert_eq!(*kud, -0.2);
                assert_eq!(*kdu, 0.2);
            }
            other => panic!("expected radial model, got {:?}", other),
        }
    }

    #[test]
    fn test_matrix_layout() {
        let cam = CameraIntrinsics::new(800.0, 900.0, 500.0, 600.0);
        let k = cam.matrix();
        assert_eq!(k[(0, 0)], 800.0);
        assert_eq!(k[(1, 1)], 900.0);
        assert_eq!(k[(0, 2)], 500.0);
        assert_eq!(k[(1, 2)], 600.0);
        assert_eq!(k[(2, 2)], 1.0);
        assert_eq!(k[(1, 0)], 0.0);
    }
}
