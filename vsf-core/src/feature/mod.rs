//! Canonical visual features and their construction

mod builder;
mod point;
mod validity;

pub use builder::{FeatureBuilder, Observation};
pub use point::FeaturePoint;
pub use validity::{MIN_DEPTH, check_depth};
