//! Observation shapes supplied by upstream trackers and pose estimators

use nalgebra::Vector4;
use serde::{Deserialize, Serialize};

/// A 2D image location in floating-point pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Column coordinate
    pub u: f64,
    /// Row coordinate
    pub v: f64,
}

impl PixelPoint {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

/// Capability exposed by any 2D tracker able to report a tracked centroid
///
/// Blob-based and keypoint-based tracker variants alike plug into feature
/// construction through this trait.
pub trait PixelCentroid {
    fn centroid(&self) -> PixelPoint;
}

/// Homogeneous 3D point in camera-centric coordinates together with its
/// cached normalized image-plane projection
///
/// The upstream pose/geometry module guarantees a non-zero homogeneous
/// scale `W`; dehomogenization here does not re-validate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFramePoint {
    coords: Vector4<f64>,
    x: f64,
    y: f64,
}

impl CameraFramePoint {
    /// Build from homogeneous coordinates, computing the projection as
    /// (X/Z, Y/Z)
    pub fn from_homogeneous(coords: Vector4<f64>) -> Self {
        Self {
            coords,
            x: coords.x / coords.z,
            y: coords.y / coords.z,
        }
    }

    /// Build from homogeneous coordinates and a projection already computed
    /// upstream
    pub fn with_projection(coords: Vector4<f64>, x: f64, y: f64) -> Self {
        Self { coords, x, y }
    }

    /// Homogeneous camera-frame coordinates (X, Y, Z, W)
    pub fn homogeneous(&self) -> &Vector4<f64> {
        &self.coords
    }

    /// Cached normalized image-plane projection
    pub fn projection(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Depth along the optical axis, Z / W
    pub fn depth(&self) -> f64 {
        self.coords.z / self.coords.w
    }
}
