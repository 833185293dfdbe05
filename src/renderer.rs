/*
 * Renderer Module
 *
 * This module handles the rendering of the particle field: particles, then
 * the links between them, then the optional debug overlay and the egui
 * panel.
 *
 * The field itself is first turned into an ordered list of shapes in screen
 * space and then painted, so the layering can be checked without a window.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::link::Link;
use crate::particle::Particle;
use crate::ui;
use crate::viewport::Viewport;
use crate::{BACKGROUND_COLOR, PARTICLE_COLOR, PARTICLE_DIAMETER};

// One primitive of the field, already in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Dot { center: Point2 },
    Line { start: Point2, end: Point2, weight: f32, alpha: u8 },
}

impl Shape {
    pub fn paint(&self, draw: &Draw) {
        let (r, g, b) = PARTICLE_COLOR;

        match *self {
            Shape::Dot { center } => {
                draw.ellipse()
                    .xy(center)
                    .w_h(PARTICLE_DIAMETER, PARTICLE_DIAMETER)
                    .color(rgb(r, g, b));
            }
            Shape::Line { start, end, weight, alpha } => {
                draw.line()
                    .start(start)
                    .end(end)
                    .weight(weight)
                    .color(rgba(r, g, b, alpha));
            }
        }
    }
}

// Particles first, links drawn over them
pub fn field_shapes(particles: &[Particle], links: &[Link], viewport: &Viewport) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(particles.len() + links.len());

    for particle in particles {
        shapes.push(Shape::Dot {
            center: viewport.field_to_screen(particle.position),
        });
    }

    for link in links {
        shapes.push(Shape::Line {
            start: viewport.field_to_screen(particles[link.a].position),
            end: viewport.field_to_screen(particles[link.b].position),
            weight: link.stroke_weight(),
            alpha: link.alpha(),
        });
    }

    shapes
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    let (r, g, b) = BACKGROUND_COLOR;
    draw.background().color(rgb(r, g, b));

    let particles = &model.field.particles;
    for shape in field_shapes(particles, &model.links, &model.viewport) {
        shape.paint(&draw);
    }

    if model.field.params.show_debug {
        // Repel radius around the pointer
        if let Some(pointer) = model.debug_info.pointer {
            draw.ellipse()
                .xy(model.viewport.field_to_screen(pointer))
                .radius(model.field.params.repel_radius)
                .no_fill()
                .stroke(rgba(1.0, 0.5, 0.0, 0.7))
                .stroke_weight(1.0);
        }

        // Canvas bounds used for reflection
        draw.rect()
            .xy(Vec2::ZERO)
            .w_h(model.field.canvas_width, model.field.canvas_height)
            .no_fill()
            .stroke_weight(1.0)
            .stroke(rgba(0.3, 0.3, 0.3, 1.0));

        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect(), particles.len());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("Failed to draw UI: {:?}", err);
    }
}
