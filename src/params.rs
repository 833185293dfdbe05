/*
 * Field Parameters Module
 *
 * This module defines the FieldParams struct that contains all the
 * adjustable parameters for the particle field. These parameters can be
 * modified through the UI or loaded from the configuration file. It also
 * provides change detection so the app knows when the particle set has to
 * be rebuilt.
 */

use serde::{Deserialize, Serialize};

// Parameters for the simulation that can be adjusted via UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    pub particle_count: usize,
    pub max_link_distance: f32,
    pub repel_radius: f32,
    pub max_repel_force: f32, // Impulse magnitude for a particle right under the pointer
    pub drift_magnitude: f32,
    pub max_speed: f32,
    pub damping: f32,
    pub min_initial_speed: f32,
    pub max_initial_speed: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    #[serde(skip)]
    pub(crate) previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParamSnapshot {
    particle_count: usize,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: 100,
            max_link_distance: 150.0,
            repel_radius: 100.0,
            max_repel_force: 2.0,
            drift_magnitude: 0.1,
            max_speed: 3.0,
            damping: 0.95,
            min_initial_speed: 0.5,
            max_initial_speed: 2.0,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl FieldParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            particle_count: self.particle_count,
        });
    }

    // Check whether the particle set has to be grown or shrunk since the last snapshot.
    pub fn particle_count_changed(&self) -> bool {
        // If we don't have previous values, nothing has changed
        self.previous_values
            .as_ref()
            .map_or(false, |prev| prev.particle_count != self.particle_count)
    }

    // Get parameter ranges for UI sliders
    pub fn get_particle_count_range() -> std::ops::RangeInclusive<usize> {
        0..=1000
    }

    pub fn get_link_distance_range() -> std::ops::RangeInclusive<f32> {
        10.0..=400.0
    }

    pub fn get_repel_radius_range() -> std::ops::RangeInclusive<f32> {
        10.0..=400.0
    }

    pub fn get_repel_force_range() -> std::ops::RangeInclusive<f32> {
        0.0..=10.0
    }

    pub fn get_drift_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.5..=20.0
    }

    pub fn get_damping_range() -> std::ops::RangeInclusive<f32> {
        0.5..=1.0
    }
}
