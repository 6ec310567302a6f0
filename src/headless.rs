/*
 * Headless Module
 *
 * Runs a school for a fixed number of ticks without a window, recording
 * into a DrawList. Used for smoke runs and timing on machines without a
 * display.
 */

use std::time::{Duration, Instant};

use rand::Rng;

use crate::canvas::DrawList;
use crate::debug::DebugInfo;
use crate::school::School;

pub fn run<R: Rng>(school: &mut School<R>, ticks: u64) -> DebugInfo {
    let mut canvas = DrawList::new();
    let start = Instant::now();

    for _ in 0..ticks {
        school.tick(&mut canvas);
    }

    let elapsed = start.elapsed();
    let mut info = DebugInfo {
        frame_time: average(elapsed, ticks),
        ..Default::default()
    };
    if elapsed > Duration::ZERO {
        info.fps = ticks as f32 / elapsed.as_secs_f32();
    }
    info.record_tick(school.ticks(), school.boids().len(), canvas.len());

    log::info!(
        "Headless run: {} ticks in {:.1} ms ({:.3} ms/tick), {} draw calls in the last frame",
        ticks,
        elapsed.as_secs_f64() * 1000.0,
        info.frame_time.as_secs_f64() * 1000.0,
        info.draw_calls
    );

    info
}

fn average(total: Duration, count: u64) -> Duration {
    match u32::try_from(count) {
        Ok(0) => Duration::ZERO,
        Ok(n) => total / n,
        Err(_) => Duration::from_secs_f64(total.as_secs_f64() / count as f64),
    }
}
