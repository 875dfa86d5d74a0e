//! Shaping loose numeric rows into [`StateVector`] series.

use astronav_core::vector::StateVector;

use crate::FrameError;

const STATE_LEN: usize = 6;

/// Component-major layout: six rows (x, y, z, vx, vy, vz), each one value per epoch.
pub fn states_from_components(rows: &[Vec<f64>]) -> Result<Vec<StateVector>, FrameError> {
    if rows.len() != STATE_LEN {
        return Err(FrameError::ShapeMismatch {
            reason: "states must have 6 elements",
            reference: STATE_LEN,
            relative: rows.len(),
        });
    }
    let epochs = rows[0].len();
    if let Some(bad) = rows.iter().find(|row| row.len() != epochs) {
        return Err(FrameError::ShapeMismatch {
            reason: "component rows must have the same length",
            reference: epochs,
            relative: bad.len(),
        });
    }
    Ok((0..epochs)
        .map(|i| std::array::from_fn(|c| rows[c][i]))
        .collect())
}

/// Epoch-major layout: one row of six values per epoch.
pub fn states_from_epochs(rows: &[Vec<f64>]) -> Result<Vec<StateVector>, FrameError> {
    rows.iter()
        .map(|row| {
            StateVector::try_from(row.as_slice()).map_err(|_| FrameError::ShapeMismatch {
                reason: "states must have 6 elements",
                reference: STATE_LEN,
                relative: row.len(),
            })
        })
        .collect()
}
