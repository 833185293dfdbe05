/*
 * Vector Module
 *
 * Small helpers on top of nannou's Vec2 for the operations the particle
 * update rule needs: rescaling to a magnitude, limiting a magnitude and
 * sampling a random unit direction.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

pub trait Vec2Ext {
    // Same direction, given length. A zero vector stays zero.
    fn with_magnitude(self, magnitude: f32) -> Vec2;

    // Rescale down to `max` if longer, otherwise unchanged.
    fn limit(self, max: f32) -> Vec2;
}

impl Vec2Ext for Vec2 {
    fn with_magnitude(self, magnitude: f32) -> Vec2 {
        let length = self.length();
        if length > 0.0 {
            self * (magnitude / length)
        } else {
            Vec2::ZERO
        }
    }

    fn limit(self, max: f32) -> Vec2 {
        let length_sq = self.length_squared();
        if length_sq > max * max {
            self * (max / length_sq.sqrt())
        } else {
            self
        }
    }
}

// Uniformly distributed direction on the unit circle
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.gen_range(0.0..TAU);
    vec2(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_with_magnitude_keeps_direction() {
        let v = vec2(3.0, 4.0).with_magnitude(10.0);
        assert!((v.x - 6.0).abs() < EPS);
        assert!((v.y - 8.0).abs() < EPS);
    }

    #[test]
    fn test_with_magnitude_of_zero_vector_is_zero() {
        assert_eq!(Vec2::ZERO.with_magnitude(5.0), Vec2::ZERO);
    }

    #[test]
    fn test_limit_only_shrinks() {
        let long = vec2(30.0, 40.0).limit(5.0);
        assert!((long.length() - 5.0).abs() < EPS);

        let short = vec2(0.3, 0.4);
        assert_eq!(short.limit(5.0), short);
    }

    #[test]
    fn test_random_unit_has_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = random_unit(&mut rng);
            assert!((v.length() - 1.0).abs() < EPS);
        }
    }
}
