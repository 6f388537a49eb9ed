use particle_engine::*;

const EPSILON: f64 = 1e-6;

fn arena_world(width: u32, height: u32, max_iterations: u32) -> World {
    let mut config = WorldConfig::default();
    config.arena.width = width;
    config.arena.height = height;
    config.constants.gravity = 0.5;
    config.constants.air_resistance = 0.99;
    config.constants.restitution = 0.8;
    config.solver.max_iterations = max_iterations;
    World::new(config).unwrap()
}

fn assert_no_deep_overlap(world: &World) {
    let particles: Vec<_> = world.particles().map(|(_, p)| p).collect();
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let min = a.radius() + b.radius() - EPSILON;
            assert!(
                a.distance(b) >= min,
                "overlap between {:?} and {:?}: {}",
                a.position,
                b.position,
                a.distance(b)
            );
        }
    }
}

fn assert_contained(world: &World) {
    let bounds = world.bounds();
    assert!(world
        .particles()
        .all(|(_, p)| bounds.contains(p.position, p.radius())));
}

#[test]
fn fifty_particles_settle_within_the_pass_cap() {
    let mut world = arena_world(200, 200, 1000);
    let ids = world.spawn_grid(10, 5, 10.0).unwrap();
    assert_eq!(ids.len(), 50);

    for frame in 0..300 {
        world.step();
        let report = *world.last_report();
        assert!(report.converged, "frame {frame} did not converge: {report:?}");
        assert!(report.passes < 1000);
        assert_contained(&world);
        assert_no_deep_overlap(&world);
    }
}

#[test]
fn randomly_packed_particles_are_relaxed_apart() {
    let mut config = WorldConfig::default();
    config.arena.width = 200;
    config.arena.height = 200;
    config.constants.gravity = 0.0;
    let mut world = World::new(config).unwrap();
    // Deterministic scatter with heavy overlap around the centre.
    for i in 0..50 {
        let angle = i as f64 * 2.399_963;
        let radius = 3.0 * (i as f64).sqrt();
        world
            .add_particle(DVec2::new(100.0, 100.0) + DVec2::from_angle(angle) * radius, 5.0)
            .unwrap();
    }

    let report = world.resolve_collisions();

    assert!(report.converged, "{report:?}");
    assert!(report.corrections > 0);
    assert_contained(&world);
    assert_no_deep_overlap(&world);
}

#[test]
fn impossible_packing_hits_the_cap_without_panicking() {
    // Three diameters of 10 can never fit in a 20-wide corridor.
    let mut world = arena_world(20, 10, 50);
    for x in [6.0, 10.0, 14.0] {
        world.add_particle(DVec2::new(x, 5.0), 5.0).unwrap();
    }

    world.step();

    let report = world.last_report();
    assert!(!report.converged);
    assert_eq!(report.passes, 50);
    assert_contained(&world);
    assert!(world
        .particles()
        .all(|(_, p)| p.position.is_finite() && p.velocity.is_finite()));
}

#[test]
fn particles_added_between_frames_join_the_next_pass() {
    let mut world = arena_world(200, 200, 1000);
    world.spawn_grid(4, 4, 10.0).unwrap();
    for _ in 0..20 {
        world.step();
    }

    let late = world.add_particle(DVec2::new(100.0, 100.0), 5.0).unwrap();
    for _ in 0..100 {
        world.step();
        assert!(world.last_report().converged);
    }

    assert!(world.particle(late).is_some());
    assert_eq!(world.particle_count(), 17);
    assert_no_deep_overlap(&world);
}
