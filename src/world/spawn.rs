use glam::DVec2;

use super::{ParticleId, World};
use crate::core::particle::Particle;
use crate::error::Result;

impl World {
    /// Places a `columns` x `rows` block of particles of diameter `size`,
    /// centred in the arena.
    ///
    /// Spacing is the arena's smaller dimension divided by the larger grid
    /// dimension, so the block always spans the short side.
    pub fn spawn_grid(&mut self, columns: u32, rows: u32, size: f64) -> Result<Vec<ParticleId>> {
        if columns == 0 || rows == 0 {
            return Ok(Vec::new());
        }
        let template = Particle::from_size(self.bounds.center(), size)?;
        self.ensure_fits(template.radius())?;

        let spacing = self.bounds.min_dimension() / columns.max(rows) as f64;
        let half_spacing = spacing / 2.0;
        let center = self.bounds.center();
        let origin = DVec2::new(
            center.x - (columns - 1) as f64 * half_spacing,
            center.y - (rows - 1) as f64 * half_spacing,
        );

        let mut ids = Vec::with_capacity(columns as usize * rows as usize);
        for x in 0..columns {
            for y in 0..rows {
                let position = origin + DVec2::new(x as f64, y as f64) * spacing;
                ids.push(self.add_particle_sized(position, size)?);
            }
        }
        Ok(ids)
    }
}
