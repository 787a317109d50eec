//! Shared types and lookup data for the Stellarforge voxel simulation.
//!
//! Everything here is consumed by at least two downstream crates: the
//! block enum and registry (world + mesh + sim), coordinate math
//! (world + mesh), face directions (world + mesh), and the
//! deterministic position hash (mesh color jitter).

pub mod block;
pub mod constants;
pub mod direction;
pub mod error;
pub mod math;
pub mod registry;
pub mod rng;
pub mod source;
pub mod types;
