/*
 * School Module
 *
 * The population manager. Owns every boid, the viewport they swim in and
 * the random source they steer with, and advances them all once per frame.
 */

use rand::rngs::StdRng;
use rand::Rng;

use crate::boid::Boid;
use crate::bounds::Viewport;
use crate::canvas::Canvas;
use crate::error::ConfigError;
use crate::factory;
use crate::params::SchoolConfig;

pub struct School<R = StdRng> {
    boids: Vec<Boid>,
    viewport: Viewport,
    rng: R,
    ticks: u64,
}

impl<R: Rng> School<R> {
    pub fn new(boids: Vec<Boid>, viewport: Viewport, rng: R) -> Self {
        Self {
            boids,
            viewport,
            rng,
            ticks: 0,
        }
    }

    pub fn from_config(config: &SchoolConfig, viewport: Viewport, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut boids = Vec::with_capacity(config.boids.len());
        for (index, spec) in config.boids.iter().enumerate() {
            let boid = factory::build(spec.color, &spec.radii, &config.params, viewport, &mut rng)
                .map_err(|source| ConfigError::InvalidBoid { index, source })?;
            boids.push(boid);
        }

        log::info!(
            "Spawned {} boids in a {:.0}x{:.0} viewport",
            boids.len(),
            viewport.width,
            viewport.height
        );

        Ok(Self::new(boids, viewport, rng))
    }

    // Clear the frame, then update and draw every boid. Later boids are
    // painted over earlier ones.
    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        canvas.clear();

        for boid in &mut self.boids {
            boid.update(self.viewport, &mut self.rng, canvas);
        }

        self.ticks += 1;
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
