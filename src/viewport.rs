/*
 * Viewport Module
 *
 * This module defines the Viewport struct that maps between field space
 * (canvas convention: origin top-left, y down) and nannou's window space
 * (origin at the window center, y up).
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: vec2(width, height) }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    // Convert a point from field space to screen space
    pub fn field_to_screen(&self, point: Point2) -> Point2 {
        pt2(point.x - self.size.x / 2.0, self.size.y / 2.0 - point.y)
    }

    // Convert a point from screen space to field space
    pub fn screen_to_field(&self, point: Point2) -> Point2 {
        pt2(point.x + self.size.x / 2.0, self.size.y / 2.0 - point.y)
    }
}
