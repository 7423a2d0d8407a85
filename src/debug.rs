/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains per-frame metrics
 * to be displayed in the UI and the on-screen overlay:
 * - FPS (frames per second)
 * - Frame time
 * - Particles and links drawn in the last frame
 */

use std::cell::Cell;
use std::time::Duration;

use crate::field::RenderStats;

// Debug information to display
#[derive(Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    // Written from the view function, which only gets `&Model`
    pub last_render: Cell<RenderStats>,
}

impl DebugInfo {
    pub fn record_frame(&mut self, fps: f32, frame_time: Duration) {
        self.fps = fps;
        self.frame_time = frame_time;
    }

    pub fn record_render(&self, stats: RenderStats) {
        self.last_render.set(stats);
    }

    pub fn lines(&self, surface_label: &str) -> Vec<String> {
        let stats = self.last_render.get();
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Particles: {}", stats.particles),
            format!("Links: {}", stats.links),
            format!("Surface: {surface_label}"),
        ]
    }
}
