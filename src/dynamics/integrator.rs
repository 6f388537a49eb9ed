use crate::core::{
    particle::Particle,
    types::{ArenaBounds, PhysicsConstants},
};
use crate::utils::allocator::Arena;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many particles the rayon fan-out costs more than it saves.
pub const PARALLEL_INTEGRATION_THRESHOLD: usize = 512;

/// Integrator responsible for stepping every particle forward one frame.
///
/// Integration touches each particle independently, so it is the one phase
/// that may run in parallel. Collision resolution never does.
#[derive(Debug, Clone, Default)]
pub struct Integrator {
    parallel: bool,
}

impl Integrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn step(
        &self,
        particles: &mut Arena<Particle>,
        constants: &PhysicsConstants,
        bounds: &ArenaBounds,
    ) {
        #[cfg(feature = "parallel")]
        if self.parallel && particles.len() >= PARALLEL_INTEGRATION_THRESHOLD {
            particles
                .par_values_mut()
                .for_each(|particle| particle.advance(constants, bounds));
            return;
        }

        for particle in particles.values_mut() {
            particle.advance(constants, bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn populate(count: usize) -> Arena<Particle> {
        let mut particles = Arena::new();
        for i in 0..count {
            let x = 10.0 + (i % 40) as f64 * 20.0;
            let y = 10.0 + (i / 40) as f64 * 20.0;
            particles.insert(Particle::new(DVec2::new(x, y), 2.0).unwrap());
        }
        particles
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let constants = PhysicsConstants::new(0.3, DVec2::new(1.0, 2.0), 0.98, 0.7).unwrap();
        let bounds = ArenaBounds::new(1000, 1000).unwrap();
        let mut sequential = populate(PARALLEL_INTEGRATION_THRESHOLD + 8);
        let mut parallel = populate(PARALLEL_INTEGRATION_THRESHOLD + 8);

        let mut integrator = Integrator::new();
        for _ in 0..30 {
            integrator.step(&mut sequential, &constants, &bounds);
        }
        integrator.set_parallel(true);
        for _ in 0..30 {
            integrator.step(&mut parallel, &constants, &bounds);
        }

        for (a, b) in sequential.values().zip(parallel.values()) {
            assert_relative_eq!(a.position.x, b.position.x);
            assert_relative_eq!(a.position.y, b.position.y);
            assert!(bounds.contains(a.position, a.radius()));
        }
    }
}
