/*
 * Field Module
 *
 * This module owns the particle set and advances it once per frame.
 * Randomness (initial placement and per-frame drift) is drawn from a
 * caller-supplied `Rng` so that seeded runs are reproducible; the
 * convenience entry points use the thread-local generator.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::link::{compute_links, Link};
use crate::params::FieldParams;
use crate::particle::Particle;
use crate::vector::random_unit;

#[derive(Debug, Clone)]
pub struct Field {
    pub particles: Vec<Particle>,
    pub params: FieldParams,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl Field {
    // Create `count` randomly placed particles on a `width` x `height` canvas.
    pub fn initialize(count: usize, width: f32, height: f32) -> Self {
        let params = FieldParams {
            particle_count: count,
            ..FieldParams::default()
        };
        Self::with_params(params, width, height, &mut rand::thread_rng())
    }

    pub fn initialize_with<R: Rng + ?Sized>(rng: &mut R, count: usize, width: f32, height: f32) -> Self {
        let params = FieldParams {
            particle_count: count,
            ..FieldParams::default()
        };
        Self::with_params(params, width, height, rng)
    }

    pub fn with_params<R: Rng + ?Sized>(params: FieldParams, width: f32, height: f32, rng: &mut R) -> Self {
        let particles = (0..params.particle_count)
            .map(|_| Particle::random(rng, width, height, &params))
            .collect();

        Self {
            particles,
            params,
            canvas_width: width,
            canvas_height: height,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        vec2(self.canvas_width, self.canvas_height)
    }

    // Advance every particle by one frame.
    pub fn step(&mut self, pointer: Option<Point2>) {
        self.step_with(&mut rand::thread_rng(), pointer);
    }

    pub fn step_with<R: Rng + ?Sized>(&mut self, rng: &mut R, pointer: Option<Point2>) {
        let bounds = self.bounds();
        for particle in &mut self.particles {
            let drift = random_unit(rng);
            particle.update(pointer, drift, &self.params, bounds);
        }
    }

    pub fn links(&self) -> Vec<Link> {
        compute_links(&self.particles, self.params.max_link_distance)
    }

    // Canvas resize notification; particles stay where they are
    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    // Grow (new random particles) or truncate the particle set to `count`
    pub fn set_particle_count<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.params.particle_count = count;
        let (width, height) = (self.canvas_width, self.canvas_height);
        let params = &self.params;
        self.particles
            .resize_with(params.particle_count, || Particle::random(rng, width, height, params));
    }

    // Re-randomize every particle
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (width, height) = (self.canvas_width, self.canvas_height);
        let params = &self.params;
        for particle in &mut self.particles {
            *particle = Particle::random(rng, width, height, params);
        }
    }
}
