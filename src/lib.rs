//! Particle Engine – 2D particle physics for Rust.
//!
//! Circular particles fall under gravity and drag inside a rectangular
//! arena, bounce off its walls, collide with each other and with fixed
//! thick line segments ("tracks"). Collisions are detected discretely once
//! per frame and resolved by an iterative relaxation that pushes shapes apart
//! and exchanges or reflects their velocities.
//!
//! ```no_run
//! use particle_engine::{DVec2, World, WorldConfig};
//!
//! let mut world = World::new(WorldConfig::default())?;
//! world.add_particle(DVec2::new(400.0, 100.0), 15.0)?;
//! world.add_track(DVec2::new(100.0, 500.0), DVec2::new(700.0, 450.0), 4.0)?;
//! for _ in 0..60 {
//!     world.step();
//! }
//! # Ok::<(), particle_engine::EngineError>(())
//! ```

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::DVec2;

pub use collision::{
    contact::{Contact, ContactTest, Obstacle},
    resolver::{CollisionResolver, ResolutionReport},
};
pub use config::{SolverSettings, WorldConfig};
pub use core::{
    particle::{Particle, WallResponse},
    track::Track,
    types::{ArenaBounds, PhysicsConstants},
};
pub use dynamics::integrator::Integrator;
pub use error::{EngineError, Result};
pub use utils::allocator::{Arena, Handle};
pub use world::{ParticleId, TrackId, World, WorldSnapshot};
