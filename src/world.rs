use glam::DVec2;
use log::debug;

use crate::{
    collision::resolver::{CollisionResolver, ResolutionReport},
    config::{SolverSettings, WorldConfig},
    core::{
        particle::{Particle, WallResponse},
        track::Track,
        types::{ArenaBounds, PhysicsConstants},
    },
    dynamics::integrator::Integrator,
    error::{EngineError, Result},
    utils::{
        allocator::{Arena, Handle},
        logging::ScopedTimer,
    },
};

mod snapshot;
mod spawn;

pub use snapshot::{ParticleState, TrackState, WorldSnapshot};

/// Stable handle to a particle owned by a [`World`].
pub type ParticleId = Handle<Particle>;

/// Stable handle to a track owned by a [`World`].
pub type TrackId = Handle<Track>;

/// Owns every particle and track plus the constants they move under.
///
/// Entities are only ever mutated inside [`World::step`] and
/// [`World::resolve_collisions`]; outside callers get shared references or a
/// [`WorldSnapshot`].
#[derive(Debug)]
pub struct World {
    particles: Arena<Particle>,
    tracks: Arena<Track>,
    constants: PhysicsConstants,
    bounds: ArenaBounds,
    integrator: Integrator,
    resolver: CollisionResolver,
    last_report: ResolutionReport,
    frame: u64,
}

impl World {
    pub fn new(config: WorldConfig) -> Result<Self> {
        let (bounds, constants, settings) = config.validate()?;
        Ok(Self {
            particles: Arena::new(),
            tracks: Arena::new(),
            constants,
            bounds,
            integrator: Integrator::new(),
            resolver: CollisionResolver::new(settings),
            last_report: ResolutionReport::default(),
            frame: 0,
        })
    }

    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.integrator.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.integrator.parallel()
    }

    pub fn constants(&self) -> &PhysicsConstants {
        &self.constants
    }

    /// Replaces gravity, drag and restitution. Takes effect on the next step.
    pub fn set_constants(&mut self, constants: PhysicsConstants) -> Result<()> {
        self.constants = constants.validated()?;
        Ok(())
    }

    pub fn bounds(&self) -> &ArenaBounds {
        &self.bounds
    }

    pub fn settings(&self) -> &SolverSettings {
        self.resolver.settings()
    }

    /// Number of completed calls to [`World::step`].
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Report of the most recent collision resolution.
    pub fn last_report(&self) -> &ResolutionReport {
        &self.last_report
    }

    pub fn add_particle(&mut self, position: DVec2, radius: f64) -> Result<ParticleId> {
        self.insert_particle(Particle::new(position, radius)?)
    }

    /// Adds a particle from its diameter.
    pub fn add_particle_sized(&mut self, position: DVec2, size: f64) -> Result<ParticleId> {
        self.insert_particle(Particle::from_size(position, size)?)
    }

    pub fn insert_particle(&mut self, particle: Particle) -> Result<ParticleId> {
        self.ensure_fits(particle.radius())?;
        let id = self.particles.insert(particle);
        debug!("added particle {id:?}");
        Ok(id)
    }

    fn ensure_fits(&self, radius: f64) -> Result<()> {
        if !self.bounds.fits(radius) {
            return Err(EngineError::ParticleTooLarge {
                radius,
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        Ok(())
    }

    pub fn add_track(&mut self, start: DVec2, end: DVec2, width: f64) -> Result<TrackId> {
        Ok(self.insert_track(Track::new(start, end, width)?))
    }

    pub fn insert_track(&mut self, track: Track) -> TrackId {
        let id = self.tracks.insert(track);
        debug!("added track {id:?}");
        id
    }

    pub fn remove_particle(&mut self, id: ParticleId) -> Option<Particle> {
        let removed = self.particles.remove(id);
        if removed.is_some() {
            debug!("removed particle {id:?}");
        }
        removed
    }

    pub fn remove_track(&mut self, id: TrackId) -> Option<Track> {
        let removed = self.tracks.remove(id);
        if removed.is_some() {
            debug!("removed track {id:?}");
        }
        removed
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id)
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id)
    }

    pub fn particles(&self) -> impl Iterator<Item = (ParticleId, &Particle)> + '_ {
        self.particles.iter()
    }

    pub fn tracks(&self) -> impl Iterator<Item = (TrackId, &Track)> + '_ {
        self.tracks.iter()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total kinetic energy, with every particle at unit mass.
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.values().map(Particle::kinetic_energy).sum()
    }

    /// Advances the simulation by one frame.
    pub fn step(&mut self) {
        {
            let _timer = ScopedTimer::new("integrator");
            self.integrator
                .step(&mut self.particles, &self.constants, &self.bounds);
        }

        self.resolve_collisions();

        {
            let _timer = ScopedTimer::new("walls::final_clamp");
            for particle in self.particles.values_mut() {
                particle.wall_collide(&self.bounds, WallResponse::ClampOnly);
            }
        }

        self.frame += 1;
    }

    /// Runs the collision relaxation on the current state without integrating.
    pub fn resolve_collisions(&mut self) -> ResolutionReport {
        let _timer = ScopedTimer::new("collisions::resolve");
        let report = self.resolver.resolve(
            &mut self.particles,
            &self.tracks,
            &self.constants,
            &self.bounds,
        );
        self.last_report = report;
        report
    }
}
