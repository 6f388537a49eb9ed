use glam::DVec2;
use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while building a world or inserting entities into it.
///
/// Nothing inside `World::step` returns an error: numerical trouble during
/// resolution is recovered locally and non-convergence is only logged.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("arena must have positive dimensions, got {width}x{height}")]
    InvalidArena { width: u32, height: u32 },

    #[error("particle radius must be finite and > 0, got {0}")]
    NonPositiveRadius(f64),

    #[error("track width must be finite and > 0, got {0}")]
    NonPositiveWidth(f64),

    /// Start and end point coincide, so the segment has no direction.
    #[error("track endpoints coincide at {start:?}")]
    DegenerateTrack { start: DVec2 },

    #[error("gravity direction must be a finite non-zero vector")]
    ZeroGravityDirection,

    #[error("{name} = {value} is outside {range}")]
    CoefficientOutOfRange {
        name: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("{0} must be finite")]
    NonFinite(&'static str),

    /// The particle could never sit inside the arena without touching two opposite walls.
    #[error("particle of radius {radius} does not fit in a {width}x{height} arena")]
    ParticleTooLarge {
        radius: f64,
        width: f64,
        height: f64,
    },

    #[error("invalid solver settings: {0}")]
    InvalidSolverSettings(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_error_names_the_field() {
        let err = EngineError::CoefficientOutOfRange {
            name: "restitution",
            value: 1.5,
            range: "[0, 1]",
        };
        let msg = err.to_string();
        assert!(msg.contains("restitution"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: EngineError = parse.into();
        assert!(matches!(err, EngineError::Json(_)));
    }
}
