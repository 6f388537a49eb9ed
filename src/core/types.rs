use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_AIR_RESISTANCE, DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_GRAVITY,
    DEFAULT_GRAVITY_DIRECTION, DEFAULT_RESTITUTION,
};
use crate::error::{EngineError, Result};

/// Rectangular arena with walls at `x = 0`, `x = width`, `y = 0` and `y = height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArenaBounds {
    pub width: f64,
    pub height: f64,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH as f64,
            height: DEFAULT_ARENA_HEIGHT as f64,
        }
    }
}

impl ArenaBounds {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidArena { width, height });
        }
        Ok(Self {
            width: width as f64,
            height: height as f64,
        })
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width, self.height) * 0.5
    }

    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Whether a circle of `radius` centred at `position` lies fully inside the walls.
    pub fn contains(&self, position: DVec2, radius: f64) -> bool {
        position.x >= radius
            && position.x <= self.width - radius
            && position.y >= radius
            && position.y <= self.height - radius
    }

    /// Whether a circle of `radius` can be placed without touching two opposite walls at once.
    pub fn fits(&self, radius: f64) -> bool {
        2.0 * radius <= self.min_dimension()
    }
}

/// Global physical constants of a world.
///
/// Built through [`PhysicsConstants::new`], which keeps `gravity_direction` unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConstants {
    /// Velocity added along `gravity_direction` every frame.
    pub gravity: f64,
    pub gravity_direction: DVec2,
    /// Multiplicative drag per frame, in `(0, 1]`.
    pub air_resistance: f64,
    /// Fraction of velocity kept after a collision, in `[0, 1]`.
    pub restitution: f64,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            gravity_direction: DVec2::from(DEFAULT_GRAVITY_DIRECTION),
            air_resistance: DEFAULT_AIR_RESISTANCE,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

impl PhysicsConstants {
    pub fn new(
        gravity: f64,
        gravity_direction: DVec2,
        air_resistance: f64,
        restitution: f64,
    ) -> Result<Self> {
        if !gravity.is_finite() {
            return Err(EngineError::NonFinite("gravity"));
        }
        let gravity_direction = gravity_direction
            .try_normalize()
            .ok_or(EngineError::ZeroGravityDirection)?;
        if !(air_resistance > 0.0 && air_resistance <= 1.0) {
            return Err(EngineError::CoefficientOutOfRange {
                name: "air_resistance",
                value: air_resistance,
                range: "(0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&restitution) {
            return Err(EngineError::CoefficientOutOfRange {
                name: "restitution",
                value: restitution,
                range: "[0, 1]",
            });
        }

        Ok(Self {
            gravity,
            gravity_direction,
            air_resistance,
            restitution,
        })
    }

    /// Re-runs validation, e.g. on values that arrived through deserialization.
    pub fn validated(self) -> Result<Self> {
        Self::new(
            self.gravity,
            self.gravity_direction,
            self.air_resistance,
            self.restitution,
        )
    }

    /// Gravity contribution added to a velocity each frame.
    pub fn gravity_step(&self) -> DVec2 {
        self.gravity_direction * self.gravity
    }
}
