/*
 * Fish Boids - Module Definitions
 *
 * This file defines the module structure for the fish school animation.
 * The simulation core (geometry, segments, boids, school) is independent
 * of any window; the nannou front end lives behind the `gui` feature.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use bounds::{EdgeCrossing, Viewport};
pub use canvas::{Canvas, Color, DrawCall, DrawList};
pub use debug::DebugInfo;
pub use error::{BuildError, ConfigError};
pub use params::{BoidParams, BoidSpec, SchoolConfig};
pub use school::School;
pub use segment::Segment;

// Define modules
pub mod boid;
pub mod bounds;
pub mod canvas;
pub mod debug;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod headless;
pub mod params;
pub mod school;
pub mod segment;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod renderer;
