/*
 * Link Module
 *
 * Proximity links between particles. Links are recomputed every frame from
 * the current particle positions and are never stored between frames.
 */

use crate::particle::Particle;

// Stroke weight at intensity 1 and intensity 0
const MAX_STROKE_WEIGHT: f32 = 2.0;
const MIN_STROKE_WEIGHT: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    // Particle indices, always a < b
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub intensity: f32,
}

impl Link {
    pub fn stroke_weight(&self) -> f32 {
        MIN_STROKE_WEIGHT + (MAX_STROKE_WEIGHT - MIN_STROKE_WEIGHT) * self.intensity
    }

    pub fn alpha(&self) -> u8 {
        (self.intensity.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

// Every unordered pair of particles closer than `max_distance`.
//
// Pairs are visited as `(i, j)` with `i < j`, so a pair is never reported
// twice and a particle is never linked to itself. Intensity is
// `1 - distance / max_distance`.
pub fn compute_links(particles: &[Particle], max_distance: f32) -> Vec<Link> {
    let mut links = Vec::new();

    for (i, p1) in particles.iter().enumerate() {
        for (offset, p2) in particles[i + 1..].iter().enumerate() {
            let distance = p1.distance(p2);

            if distance < max_distance {
                links.push(Link {
                    a: i,
                    b: i + 1 + offset,
                    distance,
                    intensity: 1.0 - distance / max_distance,
                });
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;
    use std::collections::HashSet;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(pt2(x, y), Vec2::ZERO)
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let eps = 0.01;
        let near = [at(0.0, 0.0), at(150.0 - eps, 0.0)];
        let far = [at(0.0, 0.0), at(150.0 + eps, 0.0)];
        let exact = [at(0.0, 0.0), at(150.0, 0.0)];

        assert_eq!(compute_links(&near, 150.0).len(), 1);
        assert!(compute_links(&far, 150.0).is_empty());
        assert!(compute_links(&exact, 150.0).is_empty());
    }

    #[test]
    fn test_no_self_links_or_duplicates() {
        // All particles within range of each other
        let particles: Vec<Particle> = (0..10).map(|i| at(i as f32, (i * 2) as f32)).collect();
        let links = compute_links(&particles, 150.0);

        assert_eq!(links.len(), 10 * 9 / 2);
        let mut seen = HashSet::new();
        for link in &links {
            assert!(link.a < link.b);
            assert!(seen.insert((link.a, link.b)));
        }
    }

    #[test]
    fn test_intensity_falls_off_linearly() {
        let particles = [at(0.0, 0.0), at(75.0, 0.0)];
        let links = compute_links(&particles, 150.0);
        assert!((links[0].intensity - 0.5).abs() < 1e-6);
        assert!((links[0].distance - 75.0).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_particles_have_full_intensity() {
        let particles = [at(3.0, 4.0), at(3.0, 4.0)];
        let links = compute_links(&particles, 150.0);
        assert_eq!(links[0].intensity, 1.0);
        assert_eq!(links[0].alpha(), 255);
        assert!((links[0].stroke_weight() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_stroke_and_alpha_fade_towards_cutoff() {
        let link = Link { a: 0, b: 1, distance: 149.0, intensity: 1.0 / 150.0 };
        assert!(link.stroke_weight() < 0.22);
        assert!(link.alpha() <= 2);
    }

    #[test]
    fn test_empty_and_single_particle() {
        assert!(compute_links(&[], 150.0).is_empty());
        assert!(compute_links(&[at(1.0, 1.0)], 150.0).is_empty());
    }
}
