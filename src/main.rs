/*
 * Particle Field
 *
 * A field of drifting particles that link up with their neighbours and
 * scatter away from the mouse pointer.
 *
 * Logging is controlled through RUST_LOG (default: info). Parameters can be
 * overridden with a JSON file, see the config module.
 */

use particle_field::app::{model, update};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting particle field");

    nannou::app(model).update(update).run();
}
