use crate::camera::{CameraIntrinsics, meter_to_pixel, pixel_to_meter};
use crate::error::Result;
use crate::feature::point::FeaturePoint;
use crate::feature::validity::check_depth;
use crate::observer::FeatureObserver;
use crate::tracker::{CameraFramePoint, PixelCentroid, PixelPoint};

/// One tracked primitive, in whichever shape the upstream tracker exposes
pub enum Observation<'a> {
    /// Pixel-only 2D observation; the produced feature carries no depth
    Pixel {
        intrinsics: &'a CameraIntrinsics,
        point: PixelPoint,
    },
    /// Fully resolved 3D point in the camera frame
    CameraFrame(CameraFramePoint),
    /// 3D point whose projection is round-tripped through a second,
    /// deliberately inaccurate calibration to synthesize calibration error
    PerturbedCameraFrame {
        reference: &'a CameraIntrinsics,
        perturbed: &'a CameraIntrinsics,
        point: CameraFramePoint,
    },
}

/// Builds canonical feature points from tracker observations
///
/// Stateless apart from an optional observer; safe to share across
/// control-loop instances.
#[derive(Default)]
pub struct FeatureBuilder<'a> {
    observer: Option<&'a dyn FeatureObserver>,
}

impl<'a> FeatureBuilder<'a> {
    pub fn new() -> Self {
        Self { observer: None }
    }

    /// Builder reporting every rejected observation to `observer`
    pub fn observed_by(observer: &'a dyn FeatureObserver) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    /// Single construction entry point over all observation shapes
    pub fn build(&self, observation: Observation<'_>) -> Result<FeaturePoint> {
        match observation {
            Observation::Pixel { intrinsics, point } => Ok(self.from_pixel(intrinsics, point)),
            Observation::CameraFrame(point) => self.from_camera_frame(&point),
            Observation::PerturbedCameraFrame {
                reference,
                perturbed,
                point,
            } => Ok(self.from_camera_frame_perturbed(reference, perturbed, &point)),
        }
    }

    /// Feature from a tracked 2D centroid
    ///
    /// Depth stays unset: it cannot be recovered from a centroid alone and
    /// is generally supplied later from a pose estimation, via
    /// [`FeaturePoint::with_depth`].
    pub fn from_centroid(
        &self,
        intrinsics: &CameraIntrinsics,
        tracker: &impl PixelCentroid,
    ) -> FeaturePoint {
        self.from_pixel(intrinsics, tracker.centroid())
    }

    /// Feature from a raw pixel location
    ///
    /// Numerically identical to [`FeatureBuilder::from_centroid`]; every
    /// 2D-only entry point funnels through the same conversion so tracker
    /// adapters cannot diverge.
    pub fn from_pixel(&self, intrinsics: &CameraIntrinsics, point: PixelPoint) -> FeaturePoint {
        let (x, y) = pixel_to_meter(intrinsics, &point);
        FeaturePoint::planar(x, y)
    }

    /// Feature from a 3D camera-frame point
    ///
    /// Reads the cached projection and dehomogenizes the depth, enforcing
    /// the depth invariant before the feature can reach a control law. A
    /// negative or near-zero depth fed into an interaction matrix would
    /// produce unbounded or sign-flipped control commands, so construction
    /// fails instead of returning a feature.
    pub fn from_camera_frame(&self, point: &CameraFramePoint) -> Result<FeaturePoint> {
        let depth = point.depth();
        if let Err(err) = check_depth(depth) {
            if let Some(observer) = self.observer {
                observer.depth_rejected(&err);
            }
            return Err(err);
        }

        let (x, y) = point.projection();
        Ok(FeaturePoint::new(x, y, Some(depth)))
    }

    /// Feature from a 3D camera-frame point with simulated calibration error
    ///
    /// The cached projection is converted to pixels with the `reference`
    /// calibration, then normalized again with the `perturbed` one. Depth is
    /// taken from the point unchanged, since the pixel round-trip does not
    /// affect it, and is not re-validated: the point is trusted to have
    /// passed upstream. Deterministic, intended for calibration-sensitivity
    /// studies.
    pub fn from_camera_frame_perturbed(
        &self,
        reference: &CameraIntrinsics,
        perturbed: &CameraIntrinsics,
        point: &CameraFramePoint,
    ) -> FeaturePoint {
        let (x, y) = point.projection();
        let pixel = meter_to_pixel(reference, x, y);
        let (x, y) = pixel_to_meter(perturbed, &pixel);
        FeaturePoint::new(x, y, Some(point.depth()))
    }
}
