/*
 * Input Module
 *
 * This module handles user input events for the particle field.
 *
 * Features:
 * - Pointer sampling for particle repulsion
 * - Canvas resize notifications
 * - Keyboard shortcuts (Space: pause, R: reset, D: debug overlay)
 * - Forwarding raw events to egui
 */

use nannou::prelude::*;

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.pointer_screen = Some(pos);
}

// Stop repelling once the pointer leaves the window
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.pointer_screen = None;
}

// Window resized event handler
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.viewport.resize(size);
    model.field.resize(size.x, size.y);
    log::debug!("Canvas resized to {:.0}x{:.0}", size.x, size.y);
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Keys typed into egui widgets are not shortcuts
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Space => {
            let params = &mut model.field.params;
            params.pause_simulation = !params.pause_simulation;
            log::info!("Simulation {}", if params.pause_simulation { "paused" } else { "resumed" });
        }
        Key::R => {
            model.field.reset(&mut rand::thread_rng());
            log::info!("Reset {} particles", model.field.len());
        }
        Key::D => {
            model.field.params.show_debug = !model.field.params.show_debug;
        }
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
