/*
 * Application Module
 *
 * This module defines the main application model and the per-frame update
 * for the particle field. The field is stepped exactly once per nannou
 * update, using whatever pointer position was last sampled.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::config::AppConfig;
use crate::debug::DebugInfo;
use crate::field::Field;
use crate::input::{key_pressed, mouse_exited, mouse_moved, raw_window_event, resized};
use crate::link::Link;
use crate::renderer::view;
use crate::ui;
use crate::viewport::Viewport;

// Main model for the application
pub struct Model {
    pub field: Field,
    pub links: Vec<Link>,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub viewport: Viewport,
    // Last sampled pointer in window coordinates, None when outside the window
    pub pointer_screen: Option<Point2>,
}

impl Model {
    // Pointer in field coordinates, ignored while it hovers the control panel
    pub fn pointer(&self) -> Option<Point2> {
        if self.egui.ctx().is_pointer_over_area() {
            return None;
        }
        self.pointer_screen.map(|p| self.viewport.screen_to_field(p))
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{}; falling back to default configuration", err);
            AppConfig::default()
        }
    };

    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_exited(mouse_exited)
        .resized(resized)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to build window");

    let window = app.window(window_id).expect("Window was just created");
    let egui = Egui::from_window(&window);

    // The window may not get the requested size, so use what we actually have
    let rect = window.rect();
    let viewport = Viewport::new(rect.w(), rect.h());
    log::info!("Window size {:.0}x{:.0}", rect.w(), rect.h());

    let field = Field::with_params(config.field, viewport.width(), viewport.height(), &mut rand::thread_rng());
    log::info!(
        "Initialized {} particles (link distance {}, repel radius {})",
        field.len(),
        field.params.max_link_distance,
        field.params.repel_radius
    );

    let links = field.links();

    Model {
        field,
        links,
        egui,
        debug_info: DebugInfo::default(),
        viewport,
        pointer_screen: None,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let (should_reset, particle_count_changed) = ui::update_ui(&mut model.egui, &mut model.field.params, &model.debug_info);

    if particle_count_changed {
        let count = model.field.params.particle_count;
        model.field.set_particle_count(count, &mut rand::thread_rng());
        log::debug!("Particle count changed to {}", model.field.len());
    }

    if should_reset {
        model.field.reset(&mut rand::thread_rng());
        log::info!("Reset {} particles", model.field.len());
    }

    let pointer = model.pointer();
    model.debug_info.pointer = pointer;

    if !model.field.params.pause_simulation {
        model.field.step(pointer);
    }

    model.links = model.field.links();
    model.debug_info.link_count = model.links.len();
}
