use glam::DVec2;
use serde::Serialize;

use super::particle::Particle;
use crate::error::{EngineError, Result};

/// Fixed, immovable line segment with a thickness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    start: DVec2,
    end: DVec2,
    width: f64,
    direction: DVec2,
    normal: DVec2,
}

impl Track {
    pub fn new(start: DVec2, end: DVec2, width: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(EngineError::NonFinite("track endpoint"));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(EngineError::NonPositiveWidth(width));
        }
        let direction = (end - start)
            .try_normalize()
            .ok_or(EngineError::DegenerateTrack { start })?;

        Ok(Self {
            start,
            end,
            width,
            direction,
            normal: direction.perp(),
        })
    }

    pub fn start(&self) -> DVec2 {
        self.start
    }

    pub fn end(&self) -> DVec2 {
        self.end
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Unit vector from `start` to `end`.
    pub fn direction(&self) -> DVec2 {
        self.direction
    }

    /// Unit normal, the direction rotated a quarter turn counter-clockwise.
    pub fn normal(&self) -> DVec2 {
        self.normal
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    /// Orthogonal projection of `point` onto the segment, clamped to its endpoints.
    pub fn closest_point_to(&self, point: DVec2) -> DVec2 {
        let segment = self.end - self.start;
        let l = (point - self.start).dot(segment) / segment.length_squared();

        if l <= 0.0 {
            self.start
        } else if l >= 1.0 {
            self.end
        } else {
            self.start + segment * l
        }
    }

    pub fn closest_point_on(&self, particle: &Particle) -> DVec2 {
        self.closest_point_to(particle.position)
    }

    /// Vector from the closest point on the segment to the particle centre.
    pub fn distance_vector(&self, particle: &Particle) -> DVec2 {
        particle.position - self.closest_point_on(particle)
    }

    pub fn distance(&self, particle: &Particle) -> f64 {
        self.distance_vector(particle).length()
    }

    pub fn is_colliding(&self, particle: &Particle) -> bool {
        self.distance(particle) <= self.half_width() + particle.radius()
    }
}
