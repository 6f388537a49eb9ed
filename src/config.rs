//! Default constants and the serializable world configuration.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::types::{ArenaBounds, PhysicsConstants};
use crate::error::{EngineError, Result};

/// Default arena width in world units.
pub const DEFAULT_ARENA_WIDTH: u32 = 800;

/// Default arena height in world units.
pub const DEFAULT_ARENA_HEIGHT: u32 = 600;

/// Default velocity gained along the gravity direction per frame.
pub const DEFAULT_GRAVITY: f64 = 0.5;

/// Default gravity direction (screen coordinates, Y grows downward).
pub const DEFAULT_GRAVITY_DIRECTION: [f64; 2] = [0.0, 1.0];

/// Default multiplicative drag per frame.
pub const DEFAULT_AIR_RESISTANCE: f64 = 0.99;

/// Default fraction of velocity kept after a collision.
pub const DEFAULT_RESTITUTION: f64 = 0.9;

/// Maximum number of relaxation passes per resolution.
pub const DEFAULT_MAX_RESOLUTION_ITERATIONS: u32 = 1000;

/// Extra distance added to every positional correction.
pub const DEFAULT_SEPARATION_SLOP: f64 = 1e-3;

/// Centre distance below which a contact normal cannot be computed.
pub const DEFAULT_DEGENERATE_DISTANCE: f64 = 1e-4;

/// Offset against gravity applied after pushing a particle off a track.
pub const DEFAULT_GRAVITY_BIAS: f64 = 5e-4;

/// Seed for the generator that picks separation directions for coincident particles.
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// Arena size as supplied by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
        }
    }
}

/// Physical constants as supplied by the driver, validated into [`PhysicsConstants`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantsConfig {
    pub gravity: f64,
    pub gravity_direction: DVec2,
    pub air_resistance: f64,
    /// Also accepted as `energy_loss`.
    #[serde(alias = "energy_loss")]
    pub restitution: f64,
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            gravity_direction: DVec2::from(DEFAULT_GRAVITY_DIRECTION),
            air_resistance: DEFAULT_AIR_RESISTANCE,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

/// Tuning knobs of the collision relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    pub max_iterations: u32,
    pub separation_slop: f64,
    pub degenerate_distance: f64,
    pub gravity_bias: f64,
    pub seed: u64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_RESOLUTION_ITERATIONS,
            separation_slop: DEFAULT_SEPARATION_SLOP,
            degenerate_distance: DEFAULT_DEGENERATE_DISTANCE,
            gravity_bias: DEFAULT_GRAVITY_BIAS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SolverSettings {
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(EngineError::InvalidSolverSettings(
                "max_iterations must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("separation_slop", self.separation_slop),
            ("degenerate_distance", self.degenerate_distance),
            ("gravity_bias", self.gravity_bias),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidSolverSettings(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        // Otherwise a particle under a ceiling track is biased straight back into contact.
        if self.gravity_bias > 0.0 && self.gravity_bias >= self.separation_slop {
            return Err(EngineError::InvalidSolverSettings(format!(
                "gravity_bias ({}) must be smaller than separation_slop ({})",
                self.gravity_bias, self.separation_slop
            )));
        }
        Ok(())
    }
}

/// Complete description of a world, loadable from JSON.
///
/// Every field has a default, so a file only needs the values it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub arena: ArenaConfig,
    pub constants: ConstantsConfig,
    pub solver: SolverSettings,
}

impl WorldConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every field and returns the validated runtime values.
    pub fn validate(&self) -> Result<(ArenaBounds, PhysicsConstants, SolverSettings)> {
        let bounds = ArenaBounds::new(self.arena.width, self.arena.height)?;
        let constants = PhysicsConstants::new(
            self.constants.gravity,
            self.constants.gravity_direction,
            self.constants.air_resistance,
            self.constants.restitution,
        )?;
        self.solver.validate()?;
        Ok((bounds, constants, self.solver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let (bounds, constants, solver) = WorldConfig::default().validate().unwrap();
        assert_eq!(bounds.width, DEFAULT_ARENA_WIDTH as f64);
        assert_eq!(constants.gravity_direction, DVec2::Y);
        assert_eq!(solver.max_iterations, DEFAULT_MAX_RESOLUTION_ITERATIONS);
    }

    #[test]
    fn zero_iterations_are_rejected() {
        let mut config = WorldConfig::default();
        config.solver.max_iterations = 0;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidSolverSettings(_))
        ));
    }

    #[test]
    fn negative_slop_is_rejected() {
        let mut config = WorldConfig::default();
        config.solver.separation_slop = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn gravity_bias_must_stay_below_slop() {
        let mut config = WorldConfig::default();
        config.solver.gravity_bias = config.solver.separation_slop;
        assert!(config.validate().is_err());
    }
}
