//! End-to-end scenarios for the particle field: initialize, step, link.

use nannou::prelude::*;
use particle_field::{compute_links, repulsion_impulse, Field, Particle};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn two_close_particles_form_one_bright_link() {
    let mut field = Field::initialize(2, 100.0, 100.0);
    field.particles[0].position = pt2(10.0, 10.0);
    field.particles[1].position = pt2(10.0, 10.01);
    field.params.max_link_distance = 150.0;

    let links = field.links();
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].a, links[0].b), (0, 1));
    assert!((links[0].intensity - 0.99993).abs() < 1e-4, "intensity {}", links[0].intensity);
}

#[test]
fn particle_at_right_edge_bounces_back() {
    let mut field = Field::initialize(0, 100.0, 100.0);
    field.particles.push(Particle::new(pt2(99.5, 50.0), vec2(5.0, 0.0)));

    field.step(None);
    assert!(field.particles[0].velocity.x < 0.0);
}

#[test]
fn pointer_pushes_nearby_particles_away() {
    let mut field = Field::initialize(0, 400.0, 400.0);
    field.params.drift_magnitude = 0.0;
    field.particles.push(Particle::new(pt2(210.0, 200.0), Vec2::ZERO));
    field.particles.push(Particle::new(pt2(390.0, 200.0), Vec2::ZERO));

    field.step(Some(pt2(200.0, 200.0)));

    // Inside the radius: moves away from the pointer
    assert!(field.particles[0].position.x > 210.0);
    // Outside the radius: untouched
    assert_eq!(field.particles[1].position, pt2(390.0, 200.0));
}

#[test]
fn closer_particles_get_stronger_impulse() {
    let pointer = pt2(0.0, 0.0);
    let near = repulsion_impulse(pt2(10.0, 0.0), pointer, 100.0, 2.0).length();
    let far = repulsion_impulse(pt2(60.0, 0.0), pointer, 100.0, 2.0).length();
    let outside = repulsion_impulse(pt2(100.0, 0.0), pointer, 100.0, 2.0).length();

    assert!(near >= far);
    assert_eq!(outside, 0.0);
}

#[test]
fn long_run_keeps_links_well_formed() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut field = Field::initialize_with(&mut rng, 100, 1280.0, 800.0);

    for frame in 0..200 {
        let pointer = if frame % 3 == 0 { None } else { Some(pt2(640.0, 400.0)) };
        field.step_with(&mut rng, pointer);

        for p in &field.particles {
            assert!(p.velocity.length() <= field.params.max_speed + 1e-4);
        }

        let links = compute_links(&field.particles, field.params.max_link_distance);
        assert!(links.len() <= 100 * 99 / 2);
        for link in &links {
            assert!(link.a < link.b);
            assert!(link.distance < field.params.max_link_distance);
            assert!(link.intensity > 0.0 && link.intensity <= 1.0);
        }
    }
}
