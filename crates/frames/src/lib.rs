//! Orbital frame transforms: Keplerian elements to Cartesian states, and inertial
//! states to the co-rotating Hill (radial/transverse/normal) frame of a reference
//! trajectory.

pub mod anomaly;
pub mod error;
pub mod hill;
pub mod kepler;
pub mod observation;
pub mod series;
pub mod unit;

pub use astronav_core::matrix::Matrix3;
pub use astronav_core::vector::{StateVector, Vector3};
pub use error::FrameError;
pub use hill::{
    HillDirection, first_eccentric_epoch, hill_to_inertial, hill_to_inertial_series,
    inertial_to_hill, inertial_to_hill_matrix, inertial_to_hill_series,
};
pub use kepler::{AngleUnit, OrbitalElements, kep_to_cart, kep_to_cart_str};
pub use observation::{azel_residuals, azimuth_elevation};
pub use unit::{unit_vector, unit_vector3};
