//! Core entity types: particles, tracks, and the shared world constants.

pub mod particle;
pub mod track;
pub mod types;

pub use particle::{Particle, WallResponse};
pub use track::Track;
pub use types::{ArenaBounds, PhysicsConstants};
