use thiserror::Error;

/// Failures raised by the frame transforms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("cannot normalise a vector with norm {norm:e} (below machine epsilon)")]
    DegenerateVector { norm: f64 },
    #[error("angle units must be \"deg\" or \"rad\", got `{0}`")]
    InvalidUnit(String),
    #[error("transpose flag can only be 0 or 1, got {0}")]
    InvalidFlag(u8),
    #[error("state series shape mismatch: {reason} (reference {reference}, relative {relative})")]
    ShapeMismatch {
        reason: &'static str,
        reference: usize,
        relative: usize,
    },
    #[error("Kepler equation did not converge after {iterations} iterations (M = {mean_anomaly}, e = {ecc})")]
    NoConvergence {
        mean_anomaly: f64,
        ecc: f64,
        iterations: usize,
    },
}
