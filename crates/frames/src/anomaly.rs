//! Conversions between true, eccentric, and mean anomaly for elliptic orbits.
//!
//! All angles are in radians. Eccentricity must lie in `[0, 1)`.

use astronav_core::units::wrap_two_pi;

use crate::FrameError;

const KEPLER_TOLERANCE: f64 = 1e-14;
const KEPLER_MAX_ITER: usize = 50;

/// True anomaly to eccentric anomaly.
pub fn true_to_eccentric(true_anomaly: f64, ecc: f64) -> f64 {
    let (sin_nu, cos_nu) = true_anomaly.sin_cos();
    let sin_e = (1.0 - ecc * ecc).sqrt() * sin_nu;
    let cos_e = ecc + cos_nu;
    wrap_two_pi(sin_e.atan2(cos_e))
}

/// Eccentric anomaly to true anomaly.
pub fn eccentric_to_true(ecc_anomaly: f64, ecc: f64) -> f64 {
    let (sin_e, cos_e) = ecc_anomaly.sin_cos();
    let sin_nu = (1.0 - ecc * ecc).sqrt() * sin_e;
    let cos_nu = cos_e - ecc;
    wrap_two_pi(sin_nu.atan2(cos_nu))
}

/// Kepler's equation `M = E - e sin E`.
pub fn eccentric_to_mean(ecc_anomaly: f64, ecc: f64) -> f64 {
    wrap_two_pi(ecc_anomaly - ecc * ecc_anomaly.sin())
}

/// Solve Kepler's equation for the eccentric anomaly by Newton iteration.
pub fn mean_to_eccentric(mean_anomaly: f64, ecc: f64) -> Result<f64, FrameError> {
    let m = wrap_two_pi(mean_anomaly);
    // Initial guess after Vallado (Algorithm 2).
    let mut e_anom = if ecc < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..KEPLER_MAX_ITER {
        let f = e_anom - ecc * e_anom.sin() - m;
        let step = f / (1.0 - ecc * e_anom.cos());
        e_anom -= step;
        if step.abs() < KEPLER_TOLERANCE {
            return Ok(wrap_two_pi(e_anom));
        }
    }
    Err(FrameError::NoConvergence {
        mean_anomaly: m,
        ecc,
        iterations: KEPLER_MAX_ITER,
    })
}

/// Mean anomaly to true anomaly.
pub fn mean_to_true(mean_anomaly: f64, ecc: f64) -> Result<f64, FrameError> {
    mean_to_eccentric(mean_anomaly, ecc).map(|e_anom| eccentric_to_true(e_anom, ecc))
}

/// True anomaly to mean anomaly.
pub fn true_to_mean(true_anomaly: f64, ecc: f64) -> f64 {
    eccentric_to_mean(true_to_eccentric(true_anomaly, ecc), ecc)
}
