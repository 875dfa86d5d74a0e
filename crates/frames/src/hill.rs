//! Inertial ↔ Hill (radial/transverse/normal) frame transforms.
//!
//! The Hill frame is centred on a reference trajectory with axes
//! `er = r/|r|`, `eh = (r × v)/|r × v|` and `et = eh × er`. Relative velocities
//! include the transport term of a frame spinning at `n = |r × v| / |r|²` about
//! `eh`. That rate is the instantaneous orbital rate of the reference and is only
//! exact for circular references; eccentric references get the same constant-rate
//! treatment.

use astronav_core::matrix::{self, Matrix3};
use astronav_core::vector::{self, StateVector, Vector3};
use log::{debug, warn};

use crate::FrameError;
use crate::unit::unit_vector3;

/// Radial-to-speed ratio above which a reference epoch is flagged as eccentric.
const ECCENTRIC_REFERENCE_RATIO: f64 = 0.01;

/// Direction of the rotation returned by [`inertial_to_hill_matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HillDirection {
    /// Rows `[er; et; eh]`: maps inertial components to Hill components.
    #[default]
    InertialToHill,
    /// The transpose: maps Hill components back to inertial ones.
    HillToInertial,
}

impl TryFrom<u8> for HillDirection {
    type Error = FrameError;

    /// `0` is inertial → Hill, `1` is Hill → inertial.
    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(HillDirection::InertialToHill),
            1 => Ok(HillDirection::HillToInertial),
            other => Err(FrameError::InvalidFlag(other)),
        }
    }
}

/// Rotation between the inertial frame and the Hill frame of `state`.
pub fn inertial_to_hill_matrix(
    state: &StateVector,
    direction: HillDirection,
) -> Result<Matrix3, FrameError> {
    let pos = vector::position(state);
    let vel = vector::velocity(state);

    let er = unit_vector3(&pos)?;
    let eh = unit_vector3(&vector::cross(&pos, &vel))?;
    let et = unit_vector3(&vector::cross(&eh, &er))?;

    let rotation = matrix::from_rows(er, et, eh);
    Ok(match direction {
        HillDirection::InertialToHill => rotation,
        HillDirection::HillToInertial => matrix::transpose(&rotation),
    })
}

/// Per-epoch quantities shared by the forward and inverse transforms.
struct HillEpoch {
    r: Vector3,
    v: Vector3,
    rotation: Matrix3,
    omega: Matrix3,
}

impl HillEpoch {
    fn new(reference: &StateVector) -> Result<Self, FrameError> {
        let r = vector::position(reference);
        let v = vector::velocity(reference);
        let rotation = inertial_to_hill_matrix(reference, HillDirection::InertialToHill)?;

        let r_norm = vector::norm(&r);
        let n = vector::norm(&vector::cross(&r, &v)) / (r_norm * r_norm);
        let omega = [[0.0, n, 0.0], [-n, 0.0, 0.0], [0.0, 0.0, 0.0]];

        Ok(Self {
            r,
            v,
            rotation,
            omega,
        })
    }

    fn to_hill(&self, relative: &StateVector) -> StateVector {
        let dr = vector::sub(&vector::position(relative), &self.r);
        let dv = vector::sub(&vector::velocity(relative), &self.v);

        let pos = matrix::mul_vec(&self.rotation, &dr);
        // Rotate first, then add the transport term (Ω·R)·dr.
        let transport = matrix::mul_vec(&matrix::mul(&self.omega, &self.rotation), &dr);
        let vel = vector::add(&matrix::mul_vec(&self.rotation, &dv), &transport);

        vector::stack(&pos, &vel)
    }

    fn to_inertial(&self, hill: &StateVector) -> StateVector {
        let rho = vector::position(hill);
        let rho_dot = vector::velocity(hill);
        let rt = matrix::transpose(&self.rotation);

        let pos = vector::add(&self.r, &matrix::mul_vec(&rt, &rho));
        let dv = matrix::mul_vec(&rt, &vector::sub(&rho_dot, &matrix::mul_vec(&self.omega, &rho)));
        let vel = vector::add(&self.v, &dv);

        vector::stack(&pos, &vel)
    }
}

/// Hill-frame position and velocity of `relative` about `reference`, one epoch.
pub fn inertial_to_hill(
    reference: &StateVector,
    relative: &StateVector,
) -> Result<StateVector, FrameError> {
    Ok(HillEpoch::new(reference)?.to_hill(relative))
}

/// Epoch-by-epoch [`inertial_to_hill`] over two equally long series.
///
/// Both series must be non-empty and of equal length; any degenerate reference
/// epoch aborts the whole call.
pub fn inertial_to_hill_series(
    reference: &[StateVector],
    relative: &[StateVector],
) -> Result<Vec<StateVector>, FrameError> {
    check_lengths(reference, relative)?;
    debug!("transforming {} epochs into the Hill frame", reference.len());
    warn_if_eccentric(reference);

    reference
        .iter()
        .zip(relative)
        .map(|(r, s)| inertial_to_hill(r, s))
        .collect()
}

/// Inverse of [`inertial_to_hill`]: inertial state of an object given its Hill
/// state about `reference`.
pub fn hill_to_inertial(
    reference: &StateVector,
    hill: &StateVector,
) -> Result<StateVector, FrameError> {
    Ok(HillEpoch::new(reference)?.to_inertial(hill))
}

/// Epoch-by-epoch [`hill_to_inertial`].
pub fn hill_to_inertial_series(
    reference: &[StateVector],
    hill: &[StateVector],
) -> Result<Vec<StateVector>, FrameError> {
    check_lengths(reference, hill)?;
    reference
        .iter()
        .zip(hill)
        .map(|(r, h)| hill_to_inertial(r, h))
        .collect()
}

pub(crate) fn check_lengths<A, B>(reference: &[A], relative: &[B]) -> Result<(), FrameError> {
    if reference.len() != relative.len() {
        return Err(FrameError::ShapeMismatch {
            reason: "both ephemerides must have the same length",
            reference: reference.len(),
            relative: relative.len(),
        });
    }
    if reference.is_empty() {
        return Err(FrameError::ShapeMismatch {
            reason: "ephemerides must hold at least one epoch",
            reference: 0,
            relative: 0,
        });
    }
    Ok(())
}

/// Index of the first reference epoch whose radial velocity exceeds 1% of its speed.
///
/// The constant-rate Hill velocity is only approximate from that epoch on.
pub fn first_eccentric_epoch(reference: &[StateVector]) -> Option<usize> {
    reference.iter().position(|state| {
        let r = vector::position(state);
        let v = vector::velocity(state);
        let denom = vector::norm(&r) * vector::norm(&v);
        denom > 0.0 && (vector::dot(&r, &v) / denom).abs() > ECCENTRIC_REFERENCE_RATIO
    })
}

fn warn_if_eccentric(reference: &[StateVector]) {
    if let Some(epoch) = first_eccentric_epoch(reference) {
        warn!(
            "reference epoch {epoch} has a significant radial velocity; the constant-rate Hill frame is approximate for eccentric references"
        );
    }
}
