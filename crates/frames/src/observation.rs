//! Angle-only observation of the central body as seen from the spacecraft.

use astronav_core::vector::StateVector;

use crate::FrameError;
use crate::hill::check_lengths;

/// Azimuth and elevation (rad) of the central body from the spacecraft at `state`.
///
/// The line of sight is `-r`; azimuth is measured in the inertial x-y plane from
/// +x and elevation from that plane.
pub fn azimuth_elevation(state: &StateVector) -> [f64; 2] {
    let (bx, by, bz) = (-state[0], -state[1], -state[2]);
    let azimuth = by.atan2(bx);
    let elevation = bz.atan2(bx.hypot(by));
    [azimuth, elevation]
}

/// Observation residuals `azel(truth) - azel(estimate)` per epoch.
pub fn azel_residuals(
    truth: &[StateVector],
    estimate: &[StateVector],
) -> Result<Vec<[f64; 2]>, FrameError> {
    check_lengths(truth, estimate)?;
    Ok(truth
        .iter()
        .zip(estimate)
        .map(|(t, e)| {
            let [az_t, el_t] = azimuth_elevation(t);
            let [az_e, el_e] = azimuth_elevation(e);
            [az_t - az_e, el_t - el_e]
        })
        .collect())
}
