use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::contact::{ContactTest, Obstacle};
use super::response::{exchange_normal_velocities, reflect_velocity};
use crate::{
    config::SolverSettings,
    core::{
        particle::{Particle, WallResponse},
        track::Track,
        types::{ArenaBounds, PhysicsConstants},
    },
    utils::{
        allocator::{Arena, Handle},
        logging::warn_if_unconverged,
        math::random_unit_vector,
    },
};

/// Summary of one call to [`CollisionResolver::resolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    /// Relaxation passes run, including the final clean one.
    pub passes: u32,
    /// Penetrating pairs corrected across all passes.
    pub corrections: usize,
    /// Coincident pairs nudged apart across all passes.
    pub degenerate: usize,
    /// False when the pass cap was reached with penetrations remaining.
    pub converged: bool,
}

/// Iterative position/velocity relaxation over every particle pair and particle/track pair.
///
/// Each pass visits every unordered pair once, pushing penetrating shapes
/// apart and applying the velocity response. Corrections can create new
/// overlaps elsewhere, so passes repeat until one finds nothing to fix or
/// `max_iterations` is reached.
#[derive(Debug, Clone)]
pub struct CollisionResolver {
    settings: SolverSettings,
    rng: Pcg32,
}

impl CollisionResolver {
    pub fn new(settings: SolverSettings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
        }
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    pub fn resolve(
        &mut self,
        particles: &mut Arena<Particle>,
        tracks: &Arena<Track>,
        constants: &PhysicsConstants,
        bounds: &ArenaBounds,
    ) -> ResolutionReport {
        let particle_ids = particles.ids();
        let mut report = ResolutionReport::default();

        while report.passes < self.settings.max_iterations {
            report.passes += 1;
            let found = self.run_pass(
                &particle_ids,
                particles,
                tracks,
                constants,
                bounds,
                &mut report,
            );
            if !found {
                report.converged = true;
                return report;
            }
        }

        warn_if_unconverged(&report, particle_ids.len());
        report
    }

    fn run_pass(
        &mut self,
        particle_ids: &[Handle<Particle>],
        particles: &mut Arena<Particle>,
        tracks: &Arena<Track>,
        constants: &PhysicsConstants,
        bounds: &ArenaBounds,
        report: &mut ResolutionReport,
    ) -> bool {
        let mut found = false;

        for (i, &id) in particle_ids.iter().enumerate() {
            for &other in &particle_ids[i + 1..] {
                found |=
                    self.resolve_particle_pair(id, other, particles, constants, bounds, report);
            }
            for track in tracks.values() {
                found |=
                    self.resolve_particle_track(id, track, particles, constants, bounds, report);
            }
        }

        found
    }

    fn resolve_particle_pair(
        &mut self,
        id: Handle<Particle>,
        other: Handle<Particle>,
        particles: &mut Arena<Particle>,
        constants: &PhysicsConstants,
        bounds: &ArenaBounds,
        report: &mut ResolutionReport,
    ) -> bool {
        let Some((particle, partner)) = particles.get2_mut(id, other) else {
            return false;
        };
        let slop = self.settings.separation_slop;

        let test = Obstacle::Particle(partner).contact(particle, self.settings.degenerate_distance);

        match test {
            ContactTest::Separated => false,
            ContactTest::Degenerate => {
                let direction = random_unit_vector(&mut self.rng);
                let push = direction * ((particle.radius() + partner.radius()) / 2.0 + slop);
                particle.position += push;
                partner.position -= push;
                particle.wall_collide(bounds, WallResponse::ClampOnly);
                partner.wall_collide(bounds, WallResponse::ClampOnly);
                report.degenerate += 1;
                true
            }
            ContactTest::Penetrating(contact) => {
                let correction = contact.normal * (contact.overlap / 2.0 + slop);
                particle.position += correction;
                partner.position -= correction;
                particle.wall_collide(bounds, WallResponse::ClampOnly);
                partner.wall_collide(bounds, WallResponse::ClampOnly);

                let normal = partner
                    .distance_vector(particle)
                    .try_normalize()
                    .unwrap_or(contact.normal);
                let (velocity, partner_velocity) = exchange_normal_velocities(
                    particle.velocity,
                    partner.velocity,
                    normal,
                    constants.restitution,
                );
                particle.velocity = velocity;
                partner.velocity = partner_velocity;

                report.corrections += 1;
                true
            }
        }
    }

    fn resolve_particle_track(
        &mut self,
        id: Handle<Particle>,
        track: &Track,
        particles: &mut Arena<Particle>,
        constants: &PhysicsConstants,
        bounds: &ArenaBounds,
        report: &mut ResolutionReport,
    ) -> bool {
        let Some(particle) = particles.get_mut(id) else {
            return false;
        };
        let slop = self.settings.separation_slop;

        let test = Obstacle::Track(track).contact(particle, self.settings.degenerate_distance);

        match test {
            ContactTest::Separated => false,
            ContactTest::Degenerate => {
                particle.position +=
                    track.normal() * (particle.radius() + track.half_width() + slop);
                particle.wall_collide(bounds, WallResponse::ClampOnly);
                report.degenerate += 1;
                true
            }
            ContactTest::Penetrating(contact) => {
                // The track is immovable and takes none of the correction.
                particle.position += contact.normal * (contact.overlap + slop);
                particle.velocity =
                    reflect_velocity(particle.velocity, contact.normal, constants.restitution);
                particle.position -= constants.gravity_direction * self.settings.gravity_bias;
                particle.wall_collide(bounds, WallResponse::ClampOnly);

                report.corrections += 1;
                true
            }
        }
    }
}
