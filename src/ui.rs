/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting field parameters and
 * draws the on-canvas debug text.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::FieldParams;

// Update the UI and return whether the field should be reset and whether the particle count changed
pub fn update_ui(egui: &mut Egui, params: &mut FieldParams, debug_info: &DebugInfo) -> (bool, bool) {
    let mut should_reset = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Particle Field")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Particles", |ui| {
                ui.add(egui::Slider::new(&mut params.particle_count, FieldParams::get_particle_count_range()).text("Particles"));

                if ui.button("Reset Particles").clicked() {
                    should_reset = true;
                }

                ui.add(egui::Slider::new(&mut params.max_speed, FieldParams::get_max_speed_range()).text("Max Speed"));
                ui.add(egui::Slider::new(&mut params.damping, FieldParams::get_damping_range()).text("Damping"));
                ui.add(egui::Slider::new(&mut params.drift_magnitude, FieldParams::get_drift_range()).text("Drift"));
            });

            ui.collapsing("Links & Pointer", |ui| {
                ui.add(egui::Slider::new(&mut params.max_link_distance, FieldParams::get_link_distance_range()).text("Link Distance"));
                ui.add(egui::Slider::new(&mut params.repel_radius, FieldParams::get_repel_radius_range()).text("Repel Radius"));
                ui.add(egui::Slider::new(&mut params.max_repel_force, FieldParams::get_repel_force_range()).text("Repel Force"));
            });

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Links: {}", debug_info.link_count));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    (should_reset, params.particle_count_changed())
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect, particle_count: usize) {
    // Background panel in the top-right corner, clear of the egui window
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    let pointer = match debug_info.pointer {
        Some(p) => format!("Pointer: ({:.0}, {:.0})", p.x, p.y),
        None => "Pointer: none".to_string(),
    };

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Particles: {}", particle_count),
        format!("Links: {}", debug_info.link_count),
        pointer,
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
