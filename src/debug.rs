/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * shown in the optional overlay and in the headless run summary.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Simulation ticks and boid count
 * - Draw calls emitted by the last tick
 */

use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    pub boids: usize,
    pub draw_calls: usize,
}

impl DebugInfo {
    pub fn record_tick(&mut self, ticks: u64, boids: usize, draw_calls: usize) {
        self.ticks = ticks;
        self.boids = boids;
        self.draw_calls = draw_calls;
    }

    pub fn lines(&self) -> [String; 5] {
        [
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Ticks: {}", self.ticks),
            format!("Boids: {}", self.boids),
            format!("Draw calls: {}", self.draw_calls),
        ]
    }
}
