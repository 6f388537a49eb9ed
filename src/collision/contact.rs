use glam::DVec2;

use crate::core::{particle::Particle, track::Track};

/// Something a particle can collide with.
#[derive(Debug, Clone, Copy)]
pub enum Obstacle<'a> {
    Particle(&'a Particle),
    Track(&'a Track),
}

/// Penetration between a particle and an obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the obstacle toward the particle.
    pub normal: DVec2,
    /// How deep the shapes interpenetrate, always > 0.
    pub overlap: f64,
}

/// Outcome of testing one particle against one obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactTest {
    Separated,
    /// Centres (or centre and segment) coincide, so no normal is defined.
    Degenerate,
    Penetrating(Contact),
}

impl<'a> Obstacle<'a> {
    /// Distance from the obstacle's centre line at which its surface sits.
    pub fn reach(&self) -> f64 {
        match self {
            Obstacle::Particle(other) => other.radius(),
            Obstacle::Track(track) => track.half_width(),
        }
    }

    /// Vector from the nearest point of the obstacle to the particle centre.
    pub fn distance_vector(&self, particle: &Particle) -> DVec2 {
        match self {
            Obstacle::Particle(other) => other.distance_vector(particle),
            Obstacle::Track(track) => track.distance_vector(particle),
        }
    }

    pub fn is_colliding(&self, particle: &Particle) -> bool {
        match self {
            Obstacle::Particle(other) => other.is_colliding(particle),
            Obstacle::Track(track) => track.is_colliding(particle),
        }
    }

    pub fn contact(&self, particle: &Particle, degenerate_distance: f64) -> ContactTest {
        if !self.is_colliding(particle) {
            return ContactTest::Separated;
        }

        let offset = self.distance_vector(particle);
        let distance = offset.length();
        if distance < degenerate_distance {
            return ContactTest::Degenerate;
        }

        let overlap = particle.radius() + self.reach() - distance;
        if overlap <= 0.0 {
            return ContactTest::Separated;
        }

        ContactTest::Penetrating(Contact {
            normal: offset / distance,
            overlap,
        })
    }
}
