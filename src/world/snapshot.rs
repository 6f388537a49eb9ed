use glam::DVec2;
use serde::Serialize;

use super::{ParticleId, TrackId, World};

/// Owned copy of one particle, for rendering or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleState {
    pub id: ParticleId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
}

/// Owned copy of one track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackState {
    pub id: TrackId,
    pub start: DVec2,
    pub end: DVec2,
    pub width: f64,
}

/// Read-only picture of a world between two steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub width: f64,
    pub height: f64,
    pub particles: Vec<ParticleState>,
    pub tracks: Vec<TrackState>,
}

impl WorldSnapshot {
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl World {
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            frame: self.frame,
            width: self.bounds.width,
            height: self.bounds.height,
            particles: self
                .particles()
                .map(|(id, particle)| ParticleState {
                    id,
                    position: particle.position,
                    velocity: particle.velocity,
                    radius: particle.radius(),
                })
                .collect(),
            tracks: self
                .tracks()
                .map(|(id, track)| TrackState {
                    id,
                    start: track.start(),
                    end: track.end(),
                    width: track.width(),
                })
                .collect(),
        }
    }
}
