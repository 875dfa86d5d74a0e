//! Orbital frame transforms and the small amount of tooling around them.
//!
//! The transforms live in `astronav_frames`; this facade re-exports the workspace
//! crates and adds CSV trajectory input so the binaries and integration tests
//! share one entry point.

pub mod trajectory;

pub use astronav_config as config;
pub use astronav_core::{matrix, units, vector};
pub use astronav_export as export;
pub use astronav_frames as frames;
