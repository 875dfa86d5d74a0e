//! Normalisation guarded against near-zero norms.

use astronav_core::vector::{self, Vector3};

use crate::FrameError;

/// Unit vector of an arbitrary-length slice.
///
/// Fails with [`FrameError::DegenerateVector`] when the Euclidean norm is below
/// `f64::EPSILON`.
pub fn unit_vector(v: &[f64]) -> Result<Vec<f64>, FrameError> {
    let norm = v.iter().map(|c| c * c).sum::<f64>().sqrt();
    if norm < f64::EPSILON {
        return Err(FrameError::DegenerateVector { norm });
    }
    Ok(v.iter().map(|c| c / norm).collect())
}

/// Fixed-size variant of [`unit_vector`] used by the frame rotations.
pub fn unit_vector3(v: &Vector3) -> Result<Vector3, FrameError> {
    let norm = vector::norm(v);
    if norm < f64::EPSILON {
        return Err(FrameError::DegenerateVector { norm });
    }
    Ok(vector::scale(v, 1.0 / norm))
}
