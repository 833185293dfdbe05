/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains per-frame
 * statistics to be displayed in the UI and the debug overlay.
 */

use std::time::Duration;

// Debug information to display
#[derive(Debug, Clone)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub link_count: usize,
    pub pointer: Option<nannou::prelude::Point2>,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            link_count: 0,
            pointer: None,
        }
    }
}
