//! Velocity response for resolved contacts. Every particle has the same mass.

use glam::DVec2;

use crate::utils::math::{compose, decompose};

/// Equal-mass frictionless exchange along `normal`.
///
/// The normal components of the two velocities are swapped, the tangential
/// components are kept, and both results are scaled by `restitution`.
pub fn exchange_normal_velocities(
    velocity_a: DVec2,
    velocity_b: DVec2,
    normal: DVec2,
    restitution: f64,
) -> (DVec2, DVec2) {
    let (normal_a, tangent_a) = decompose(velocity_a, normal);
    let (normal_b, tangent_b) = decompose(velocity_b, normal);

    (
        compose(normal_b, tangent_a, normal) * restitution,
        compose(normal_a, tangent_b, normal) * restitution,
    )
}

/// Mirror `velocity` about the surface with unit `normal`, then scale by `restitution`.
pub fn reflect_velocity(velocity: DVec2, normal: DVec2, restitution: f64) -> DVec2 {
    (velocity - 2.0 * velocity.dot(normal) * normal) * restitution
}
