/*
 * Error Module
 *
 * Everything that can go wrong happens before the first frame: a boid
 * built from a bad radius profile or a population file that does not load.
 */

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("a boid needs at least 2 body radii, got {0}")]
    ProfileTooShort(usize),

    #[error("body radius #{index} must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("a boid needs at least one tail segment")]
    EmptyTail,

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidParam { name: &'static str, value: f32 },

    #[error("{name} interval {start}..{end} is empty")]
    EmptyInterval {
        name: &'static str,
        start: u32,
        end: u32,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read population file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse population file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("invalid boid parameters")]
    InvalidParams(#[source] BuildError),

    #[error("population file describes no boids")]
    EmptyPopulation,

    #[error("invalid boid #{index} in population")]
    InvalidBoid {
        index: usize,
        #[source]
        source: BuildError,
    },
}
