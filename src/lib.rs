/*
 * Particle Field - Module Definitions
 *
 * This file defines the module structure for the particle field application.
 * The simulation core (vector, particle, link, field, params) has no
 * dependency on the window; the remaining modules drive it with nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use config::{AppConfig, ConfigError};
pub use debug::DebugInfo;
pub use field::Field;
pub use link::{compute_links, Link};
pub use params::FieldParams;
pub use particle::{repulsion_impulse, Particle};
pub use viewport::Viewport;

// Define modules
pub mod app;
pub mod config;
pub mod debug;
pub mod field;
pub mod input;
pub mod link;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod ui;
pub mod vector;
pub mod viewport;

// Constants
pub const PARTICLE_DIAMETER: f32 = 5.0;
pub const PARTICLE_COLOR: (u8, u8, u8) = (47, 98, 194);
pub const BACKGROUND_COLOR: (u8, u8, u8) = (22, 33, 62);
