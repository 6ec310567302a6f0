/*
 * Application Module
 *
 * This module defines the nannou model for the windowed simulation.
 * The viewport is fixed from the window size at startup. Every update
 * ticks the school into a DrawList; the view (see renderer.rs) replays
 * that list onto the window.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bounds::Viewport;
use crate::canvas::{Color, DrawList};
use crate::debug::DebugInfo;
use crate::params::SchoolConfig;
use crate::renderer::view;
use crate::school::School;

// Fallback window size when no monitor is reported
const DEFAULT_WINDOW: (u32, u32) = (1280, 720);

// nannou builds the model from a plain fn pointer, so startup options are
// handed over through this cell.
static LAUNCH: OnceLock<Launch> = OnceLock::new();

#[derive(Clone, Debug, Default)]
pub struct Launch {
    pub config: SchoolConfig,
    pub seed: Option<u64>,
    pub show_debug: bool,
}

pub struct Model {
    pub school: School,
    pub frame: DrawList,
    pub background: Color,
    pub debug_info: DebugInfo,
    pub show_debug: bool,
}

pub fn run(launch: Launch) {
    if LAUNCH.set(launch).is_err() {
        log::warn!("Launch options were already set; keeping the first ones");
    }

    nannou::app(model).update(update).run();
}

pub fn model(app: &App) -> Model {
    let launch = LAUNCH.get().cloned().unwrap_or_default();

    // 80% of the primary monitor, like a browser window that isn't maximized
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            ((size.width as f32 * 0.8) as u32, (size.height as f32 * 0.8) as u32)
        }
        None => DEFAULT_WINDOW,
    };

    app.new_window()
        .title("Fish Boids")
        .size(window_width, window_height)
        .view(view)
        .build()
        .expect("Failed to create window");

    let rect = app.window_rect();
    let viewport = Viewport::new(rect.w(), rect.h());

    let rng = match launch.seed {
        Some(seed) => {
            log::info!("Using RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // The population was validated before the window opened
    let school = School::from_config(&launch.config, viewport, rng).expect("Invalid population");

    Model {
        school,
        frame: DrawList::new(),
        background: launch.config.background,
        debug_info: DebugInfo::default(),
        show_debug: launch.show_debug,
    }
}

pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.school.tick(&mut model.frame);

    model.debug_info.record_tick(
        model.school.ticks(),
        model.school.boids().len(),
        model.frame.len(),
    );
}
