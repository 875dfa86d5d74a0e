//! CSV trajectory input: one inertial state per row, keyed by epoch.

use std::path::Path;

use astronav_frames::StateVector;
use csv::ReaderBuilder;
use thiserror::Error;

/// Columns a trajectory CSV must provide, in state order after the epoch.
pub const COLUMNS: [&str; 7] = ["epoch_s", "x_m", "y_m", "z_m", "vx_m_s", "vy_m_s", "vz_m_s"];

/// Inertial states sampled at increasing epochs.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub epochs_s: Vec<f64>,
    pub states: Vec<StateVector>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Errors surfaced while reading trajectory CSV files.
#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("failed to read trajectory CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("trajectory CSV missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("row {row}: column '{column}' is not a finite number: `{value}`")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Read a trajectory from a CSV file with a [`COLUMNS`] header; extra columns are ignored.
pub fn read_trajectory<P: AsRef<Path>>(path: P) -> Result<Trajectory, TrajectoryError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let headers = rdr.headers()?.clone();
    let mut indices = [0usize; 7];
    for (slot, column) in indices.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or(TrajectoryError::MissingColumn(column))?;
    }

    let mut trajectory = Trajectory::default();
    for (row, rec) in rdr.records().enumerate() {
        let r = rec?;
        let mut values = [0.0; 7];
        for ((value, &idx), column) in values.iter_mut().zip(&indices).zip(COLUMNS) {
            let raw = r.get(idx).unwrap_or("");
            *value = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| TrajectoryError::InvalidValue {
                    row: row + 1,
                    column,
                    value: raw.to_string(),
                })?;
        }
        trajectory.epochs_s.push(values[0]);
        trajectory
            .states
            .push([values[1], values[2], values[3], values[4], values[5], values[6]]);
    }
    Ok(trajectory)
}
