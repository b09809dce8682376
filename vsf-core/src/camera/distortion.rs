use serde::{Deserialize, Serialize};

/// Optional nonlinear lens correction applied during conversion
///
/// The radial model carries one coefficient per direction so both
/// conversions stay closed-form: `kud` scales metric coordinates on the way
/// to pixels, `kdu` scales pixel-derived coordinates on the way back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DistortionModel {
    None,
    Radial { kud: f64, kdu: f64 },
}

impl DistortionModel {
    /// Scale factor for normalized coordinates being projected to pixels
    pub(super) fn meter_scale(&self, r2: f64) -> f64 {
        match self {
            DistortionModel::None => 1.0,
            DistortionModel::Radial { kud, .. } => 1.0 + kud * r2,
        }
    }

    /// Scale factor for pixel-derived coordinates being normalized
    pub(super) fn pixel_scale(&self, r2: f64) -> f64 {
        match self {
            DistortionModel::None => 1.0,
            DistortionModel::Radial { kdu, .. } => 1.0 + kdu * r2,
        }
    }
}
