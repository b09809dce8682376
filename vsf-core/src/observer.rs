//! Caller-injected observability hook

use crate::error::DepthError;

/// Failure-path tracing capability injected by the orchestration layer
///
/// This core holds no process-wide logging state. An orchestrator that
/// wants visibility into rejected observations passes an implementation to
/// [`FeatureBuilder::observed_by`](crate::feature::FeatureBuilder::observed_by).
pub trait FeatureObserver {
    /// Called for every 3D observation rejected by the depth checks, before
    /// the error propagates to the caller
    fn depth_rejected(&self, err: &DepthError);
}
