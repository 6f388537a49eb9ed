use glam::DVec2;
use serde::Serialize;

use super::types::{ArenaBounds, PhysicsConstants};
use crate::error::{EngineError, Result};

/// How a wall contact affects the particle's velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WallResponse {
    /// Negate the clamped velocity component and scale it by `restitution`.
    Bounce { restitution: f64 },
    /// Only move the particle back inside the arena.
    ClampOnly,
}

/// Circular point-mass. All particles share the same (unit) mass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    radius: f64,
}

impl Particle {
    /// Creates a particle at rest.
    pub fn new(position: DVec2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(EngineError::NonPositiveRadius(radius));
        }
        if !position.is_finite() {
            return Err(EngineError::NonFinite("particle position"));
        }
        Ok(Self {
            position,
            velocity: DVec2::ZERO,
            radius,
        })
    }

    /// Creates a particle from its diameter.
    pub fn from_size(position: DVec2, size: f64) -> Result<Self> {
        Self::new(position, size / 2.0)
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Result<Self> {
        if !velocity.is_finite() {
            return Err(EngineError::NonFinite("particle velocity"));
        }
        self.velocity = velocity;
        Ok(self)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn size(&self) -> f64 {
        self.radius * 2.0
    }

    /// Advances the particle by one frame: gravity, drag, integration, then walls.
    pub fn advance(&mut self, constants: &PhysicsConstants, bounds: &ArenaBounds) {
        self.velocity += constants.gravity_step();
        self.velocity *= constants.air_resistance;
        self.position += self.velocity;

        self.wall_collide(
            bounds,
            WallResponse::Bounce {
                restitution: constants.restitution,
            },
        );
    }

    /// Clamps the particle inside the arena. Returns whether any axis was clamped.
    ///
    /// The comparisons are strict, so a particle resting exactly on a wall is
    /// left alone and a second call in the same state is a no-op.
    pub fn wall_collide(&mut self, bounds: &ArenaBounds, response: WallResponse) -> bool {
        let r = self.radius;

        let clamped_x = clamp_axis(
            &mut self.position.x,
            &mut self.velocity.x,
            r,
            bounds.width - r,
            response,
        );
        let clamped_y = clamp_axis(
            &mut self.position.y,
            &mut self.velocity.y,
            r,
            bounds.height - r,
            response,
        );

        clamped_x || clamped_y
    }

    /// Vector from this particle's centre to `other`'s centre.
    pub fn distance_vector(&self, other: &Particle) -> DVec2 {
        other.position - self.position
    }

    pub fn distance(&self, other: &Particle) -> f64 {
        self.distance_vector(other).length()
    }

    pub fn is_colliding(&self, other: &Particle) -> bool {
        self.distance(other) <= self.radius + other.radius
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.velocity.length_squared()
    }
}

fn clamp_axis(
    position: &mut f64,
    velocity: &mut f64,
    min: f64,
    max: f64,
    response: WallResponse,
) -> bool {
    let target = if *position < min {
        min
    } else if *position > max {
        max
    } else {
        return false;
    };

    *position = target;
    if let WallResponse::Bounce { restitution } = response {
        *velocity *= -restitution;
    }
    true
}
