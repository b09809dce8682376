//! Camera intrinsics and pixel/metric conversion

mod conversion;
mod distortion;
mod intrinsics;

pub use conversion::{meter_to_pixel, pixel_to_meter};
pub use distortion::DistortionModel;
pub use intrinsics::CameraIntrinsics;
