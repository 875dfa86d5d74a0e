//! Classical orbital elements to inertial Cartesian state.
//!
//! Closed-form conversion after Wakker, *Fundamentals of Astrodynamics* (2009):
//! the perifocal coordinates `(xi, eta)` are projected into the inertial frame
//! through the direction cosines `l1..n2` of the RAAN/inclination/argument of
//! perigee rotation sequence.

use std::fmt;
use std::str::FromStr;

use astronav_core::vector::StateVector;

use crate::FrameError;
use crate::anomaly;

/// Unit in which the four angular elements are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle.to_radians(),
            AngleUnit::Radians => angle,
        }
    }
}

impl FromStr for AngleUnit {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deg" => Ok(AngleUnit::Degrees),
            "rad" => Ok(AngleUnit::Radians),
            other => Err(FrameError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "deg"),
            AngleUnit::Radians => write!(f, "rad"),
        }
    }
}

/// Keplerian element set `(sma, ecc, inc, raan, argPerigee, trueAnomaly)`.
///
/// Angles are stored in whatever unit the caller used; the unit travels separately
/// as an [`AngleUnit`] so the same set can be converted either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub sma_m: f64,
    pub ecc: f64,
    pub inc: f64,
    pub raan: f64,
    pub arg_perigee: f64,
    pub true_anomaly: f64,
}

impl OrbitalElements {
    /// Build from a flat `[sma, ecc, inc, raan, argP, trueAnomaly]` array.
    pub fn from_array(oe: [f64; 6]) -> Self {
        let [sma_m, ecc, inc, raan, arg_perigee, true_anomaly] = oe;
        Self {
            sma_m,
            ecc,
            inc,
            raan,
            arg_perigee,
            true_anomaly,
        }
    }

    /// Flat array in the same order as [`OrbitalElements::from_array`].
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.sma_m,
            self.ecc,
            self.inc,
            self.raan,
            self.arg_perigee,
            self.true_anomaly,
        ]
    }

    /// Build an element set from a mean anomaly instead of a true anomaly.
    ///
    /// `mean_anomaly` is in `units` like the other angles; the stored true anomaly
    /// is returned in the same unit.
    pub fn with_mean_anomaly(
        sma_m: f64,
        ecc: f64,
        inc: f64,
        raan: f64,
        arg_perigee: f64,
        mean_anomaly: f64,
        units: AngleUnit,
    ) -> Result<Self, FrameError> {
        let nu = anomaly::mean_to_true(units.to_radians(mean_anomaly), ecc)?;
        let true_anomaly = match units {
            AngleUnit::Degrees => nu.to_degrees(),
            AngleUnit::Radians => nu,
        };
        Ok(Self {
            sma_m,
            ecc,
            inc,
            raan,
            arg_perigee,
            true_anomaly,
        })
    }

    /// Copy of the elements with every angle converted to radians.
    pub fn in_radians(self, units: AngleUnit) -> Self {
        Self {
            inc: units.to_radians(self.inc),
            raan: units.to_radians(self.raan),
            arg_perigee: units.to_radians(self.arg_perigee),
            true_anomaly: units.to_radians(self.true_anomaly),
            ..self
        }
    }
}

/// Convert Keplerian elements to an inertial `[x, y, z, vx, vy, vz]` state.
///
/// Output units follow `sma_m` and `mu` (m and m/s for SI inputs). The elements are
/// taken by value, so the caller's copy is left in the units it was given.
///
/// Preconditions, not checked: `0 <= ecc < 1` and `sma_m > 0`. A parabolic orbit
/// or a zero semi-major axis divides by zero in the angular momentum.
pub fn kep_to_cart(elements: OrbitalElements, mu: f64, units: AngleUnit) -> StateVector {
    let oe = elements.in_radians(units);
    let ecc = oe.ecc;

    let (sin_ta, cos_ta) = oe.true_anomaly.sin_cos();
    let (sin_raan, cos_raan) = oe.raan.sin_cos();
    let (sin_argp, cos_argp) = oe.arg_perigee.sin_cos();
    let (sin_inc, cos_inc) = oe.inc.sin_cos();

    let semi_latus = oe.sma_m * (1.0 - ecc * ecc);
    let r_mag = semi_latus / (1.0 + ecc * cos_ta);
    let h_mag = (mu * semi_latus).sqrt();

    let l1 = cos_raan * cos_argp - sin_raan * sin_argp * cos_inc;
    let l2 = -cos_raan * sin_argp - sin_raan * cos_argp * cos_inc;
    let m1 = sin_raan * cos_argp + cos_raan * sin_argp * cos_inc;
    let m2 = -sin_raan * sin_argp + cos_raan * cos_argp * cos_inc;
    let n1 = sin_argp * sin_inc;
    let n2 = cos_argp * sin_inc;

    let xi = r_mag * cos_ta;
    let eta = r_mag * sin_ta;

    let k = mu / h_mag;
    let e_plus_cos = ecc + cos_ta;

    [
        l1 * xi + l2 * eta,
        m1 * xi + m2 * eta,
        n1 * xi + n2 * eta,
        k * (-l1 * sin_ta + l2 * e_plus_cos),
        k * (-m1 * sin_ta + m2 * e_plus_cos),
        k * (-n1 * sin_ta + n2 * e_plus_cos),
    ]
}

/// String-flag entry point: `angle_units` must be `"deg"` or `"rad"`.
pub fn kep_to_cart_str(
    elements: OrbitalElements,
    mu: f64,
    angle_units: &str,
) -> Result<StateVector, FrameError> {
    let units: AngleUnit = angle_units.parse()?;
    Ok(kep_to_cart(elements, mu, units))
}
