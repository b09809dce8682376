pub mod camera;
pub mod error;
pub mod feature;
pub mod observer;
pub mod tracker;

pub use camera::{CameraIntrinsics, DistortionModel, meter_to_pixel, pixel_to_meter};
pub use error::{DepthError, Result};
pub use feature::{FeatureBuilder, FeaturePoint, MIN_DEPTH, Observation, check_depth};
pub use observer::FeatureObserver;
pub use tracker::{CameraFramePoint, PixelCentroid, PixelPoint};
