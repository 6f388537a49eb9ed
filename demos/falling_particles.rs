//! Headless driver: drops a grid of particles onto two ramps and prints
//! a summary every second of simulated time.
//!
//! Pass a JSON config path as the first argument to override the defaults.

use particle_engine::*;

const FRAMES_PER_SECOND: u64 = 60;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => WorldConfig::from_json_file(path)?,
        None => WorldConfig::default(),
    };

    let mut world = World::new(config)?;
    let bounds = *world.bounds();

    world.add_track(
        DVec2::new(bounds.width * 0.1, bounds.height * 0.55),
        DVec2::new(bounds.width * 0.6, bounds.height * 0.7),
        2.0,
    )?;
    world.add_track(
        DVec2::new(bounds.width * 0.9, bounds.height * 0.75),
        DVec2::new(bounds.width * 0.4, bounds.height * 0.9),
        2.0,
    )?;
    world.spawn_grid(8, 4, 30.0)?;

    for frame in 1..=FRAMES_PER_SECOND * 10 {
        world.step();

        if frame % FRAMES_PER_SECOND == 0 {
            let report = world.last_report();
            println!(
                "t={:>2}s particles={} energy={:.3} passes={} converged={}",
                frame / FRAMES_PER_SECOND,
                world.particle_count(),
                world.kinetic_energy(),
                report.passes,
                report.converged
            );
        }
    }

    if let Some(state) = world.snapshot().particles.first() {
        println!("first particle rests at {:?}", state.position);
    }
    Ok(())
}
