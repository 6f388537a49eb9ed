//! Additional 2D math helpers layered on top of `glam`.

use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Uniformly distributed unit vector.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> DVec2 {
    DVec2::from_angle(rng.random_range(0.0..TAU))
}

/// Splits `v` into its components along `normal` and along `normal.perp()`.
///
/// `normal` must be unit length.
pub fn decompose(v: DVec2, normal: DVec2) -> (f64, f64) {
    (v.dot(normal), v.dot(normal.perp()))
}

/// Inverse of [`decompose`].
pub fn compose(normal_part: f64, tangent_part: f64, normal: DVec2) -> DVec2 {
    normal * normal_part + normal.perp() * tangent_part
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn random_unit_vectors_are_normalized() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..32 {
            let v = random_unit_vector(&mut rng);
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn decompose_then_compose_restores_vector() {
        let normal = DVec2::new(3.0, 4.0).normalize();
        let v = DVec2::new(-2.5, 7.0);
        let (n, t) = decompose(v, normal);
        let back = compose(n, t, normal);
        assert_relative_eq!(back.x, v.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, v.y, epsilon = 1e-12);
    }
}
