/*
 * Particle Module
 *
 * This module defines the Particle struct and the per-frame update rule.
 * Each frame a particle is:
 * 1. Pushed away from the pointer when it is within the repel radius
 * 2. Nudged by a small random drift
 * 3. Speed limited, moved, damped
 * 4. Bounced off the canvas edges
 *
 * Positions are in field coordinates: origin at the top-left corner of the
 * canvas, y pointing down.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::FieldParams;
use crate::vector::{random_unit, Vec2Ext};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point2,
    pub velocity: Vec2,
}

impl Particle {
    pub fn new(position: Point2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    // Uniformly random position inside `[0, width) x [0, height)` and a
    // random heading with speed between the configured initial bounds.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, params: &FieldParams) -> Self {
        let x = sample_range(rng, 0.0, width);
        let y = sample_range(rng, 0.0, height);
        let speed = sample_range(rng, params.min_initial_speed, params.max_initial_speed);

        Self {
            position: pt2(x, y),
            velocity: random_unit(rng) * speed,
        }
    }

    // Advance one frame. `drift_direction` is the unit vector sampled for
    // this frame; everything else is deterministic.
    pub fn update(&mut self, pointer: Option<Point2>, drift_direction: Vec2, params: &FieldParams, bounds: Vec2) {
        if let Some(pointer) = pointer {
            self.velocity += repulsion_impulse(self.position, pointer, params.repel_radius, params.max_repel_force);
        }

        self.velocity += drift_direction * params.drift_magnitude;
        self.velocity = self.velocity.limit(params.max_speed);

        self.position += self.velocity;

        // Damping only affects the next frame
        self.velocity *= params.damping;

        self.reflect(bounds);
    }

    // Flip the velocity component on each axis where the particle left the canvas.
    // Position is not clamped back inside.
    pub fn reflect(&mut self, bounds: Vec2) {
        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn distance(&self, other: &Particle) -> f32 {
        self.position.distance(other.position)
    }
}

// Velocity impulse pushing a particle at `position` away from `pointer`.
//
// The magnitude falls off linearly from `max_force` at distance 0 to zero at
// `radius`; at or beyond `radius` the impulse is exactly zero. A particle
// sitting exactly on the pointer is pushed along +x.
pub fn repulsion_impulse(position: Point2, pointer: Point2, radius: f32, max_force: f32) -> Vec2 {
    let offset = position - pointer;
    let distance = offset.length();
    if distance >= radius {
        return Vec2::ZERO;
    }

    let magnitude = (max_force * (1.0 - distance / radius)).clamp(0.0, max_force.max(0.0));
    if distance > 0.0 {
        offset.with_magnitude(magnitude)
    } else {
        Vec2::X * magnitude
    }
}

// Uniform sample in [low, high); degenerate ranges collapse to `low`
fn sample_range<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}
