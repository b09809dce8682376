use super::CameraIntrinsics;
use crate::tracker::PixelPoint;

/// Convert a pixel location to normalized metric image-plane coordinates
///
/// Pure and total over any input: pixel coordinates are deliberately not
/// range-checked, since sub- and super-pixel extrapolation is legitimate
/// for some trackers. A near-zero focal length is a caller configuration
/// error and is not handled here.
pub fn pixel_to_meter(cam: &CameraIntrinsics, point: &PixelPoint) -> (f64, f64) {
    let (fx, fy) = cam.focal_length();
    let (cx, cy) = cam.principal_point();

    let x = (point.u - cx) / fx;
    let y = (point.v - cy) / fy;

    let scale = cam.distortion().pixel_scale(x * x + y * y);
    (x * scale, y * scale)
}

/// Project normalized metric image-plane coordinates to a pixel location
///
/// Inverse of [`pixel_to_meter`] for the ideal model; with a radial model
/// the two directions use their own coefficient and invert each other only
/// approximately.
pub fn meter_to_pixel(cam: &CameraIntrinsics, x: f64, y: f64) -> PixelPoint {
    let (fx, fy) = cam.focal_length();
    let (cx, cy) = cam.principal_point();

    let scale = cam.distortion().meter_scale(x * x + y * y);
    PixelPoint::new(cx + fx * x * scale, cy + fy * y * scale)
}
