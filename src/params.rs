/*
 * Simulation Parameters Module
 *
 * This module defines the tunable constants of a boid (turning, blinking,
 * tail length, speed) and the population description loaded at startup.
 * Both can come from a RON file; anything left out falls back to the
 * defaults below.
 */

use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::Color;
use crate::error::{BuildError, ConfigError};

// Per-boid steering and animation constants
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoidParams {
    pub rotation_angle: f32,           // Full width of an idle turn, in degrees
    pub rotation_interval: Range<u32>, // Frames between idle turns
    pub blink_interval: Range<u32>,    // Frames between blinks
    pub tail_segments: usize,
    pub base_speed: f32,
    pub speed_steps: u32,              // Speed is base + k/10 for k in 0..speed_steps
}

impl Default for BoidParams {
    fn default() -> Self {
        Self {
            rotation_angle: 60.0,
            rotation_interval: 10..40,
            blink_interval: 60..360,
            tail_segments: 4,
            base_speed: 1.5,
            speed_steps: 10,
        }
    }
}

impl BoidParams {
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.tail_segments == 0 {
            return Err(BuildError::EmptyTail);
        }
        check_finite("rotation_angle", self.rotation_angle)?;
        check_finite("base_speed", self.base_speed)?;
        if self.base_speed < 0.0 {
            return Err(BuildError::InvalidParam {
                name: "base_speed",
                value: self.base_speed,
            });
        }
        check_interval("rotation", &self.rotation_interval)?;
        check_interval("blink", &self.blink_interval)?;
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f32) -> Result<(), BuildError> {
    if !value.is_finite() {
        return Err(BuildError::InvalidParam { name, value });
    }
    Ok(())
}

fn check_interval(name: &'static str, interval: &Range<u32>) -> Result<(), BuildError> {
    if interval.is_empty() {
        return Err(BuildError::EmptyInterval {
            name,
            start: interval.start,
            end: interval.end,
        });
    }
    Ok(())
}

// One boid of the population: its color and head-to-tail body radii
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoidSpec {
    pub color: Color,
    pub radii: Vec<f32>,
}

impl BoidSpec {
    pub fn new(color: Color, radii: &[f32]) -> Self {
        Self {
            color,
            radii: radii.to_vec(),
        }
    }
}

pub const SMALL_FISH: [f32; 5] = [20.0, 21.0, 16.0, 10.0, 4.0];
pub const LARGE_FISH: [f32; 6] = [25.0, 28.0, 25.0, 20.0, 12.0, 5.0];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    pub background: Color,
    pub params: BoidParams,
    pub boids: Vec<BoidSpec>,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        // Eight small gray fish and a large white and black pair
        let mut boids: Vec<BoidSpec> = (0..8).map(|_| BoidSpec::new(Color::Gray, &SMALL_FISH)).collect();
        boids.push(BoidSpec::new(Color::White, &LARGE_FISH));
        boids.push(BoidSpec::new(Color::Black, &LARGE_FISH));

        Self {
            background: Color::Rgb(24, 82, 122),
            params: BoidParams::default(),
            boids,
        }
    }
}

impl SchoolConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: SchoolConfig = ron::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "Loaded {} boid(s) from {}",
            config.boids.len(),
            path.display()
        );

        config.validate()?;
        Ok(config)
    }

    // Catch bad profiles here so the error names the offending entry
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boids.is_empty() {
            return Err(ConfigError::EmptyPopulation);
        }

        self.params.validate().map_err(ConfigError::InvalidParams)?;

        for (index, spec) in self.boids.iter().enumerate() {
            crate::factory::check_profile(&spec.radii)
                .map_err(|source| ConfigError::InvalidBoid { index, source })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_population_matches_classic_school() {
        let config = SchoolConfig::default();

        assert_eq!(config.boids.len(), 10);
        assert_eq!(config.boids.iter().filter(|b| b.color == Color::Gray).count(), 8);
        assert_eq!(config.boids[8].radii, LARGE_FISH.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_ron_falls_back_to_defaults() {
        let text = r#"(
            params: (rotation_angle: 90.0),
            boids: [(color: Rgb(200, 80, 40), radii: [12.0, 10.0, 6.0])],
        )"#;
        let config: SchoolConfig = ron::from_str(text).unwrap();

        assert_eq!(config.params.rotation_angle, 90.0);
        assert_eq!(config.params.rotation_interval, 10..40);
        assert_eq!(config.params.tail_segments, 4);
        assert_eq!(config.boids.len(), 1);
        assert_eq!(config.boids[0].color, Color::Rgb(200, 80, 40));
    }

    #[test]
    fn test_zero_tail_is_rejected() {
        let params = BoidParams {
            tail_segments: 0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(BuildError::EmptyTail));
    }

    #[test]
    fn test_empty_interval_is_rejected() {
        let params = BoidParams {
            blink_interval: 30..30,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(BuildError::EmptyInterval { name: "blink", .. })
        ));
    }

    #[test]
    fn test_infinite_rotation_angle_is_rejected() {
        let text = "(params: (rotation_angle: inf, rotation_interval: (start: 1, end: 2)))";
        let config: SchoolConfig = ron::from_str(text).unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParams(BuildError::InvalidParam { name: "rotation_angle", .. }))
        ));
    }

    #[test]
    fn test_nan_base_speed_is_rejected() {
        let params = BoidParams {
            base_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(BuildError::InvalidParam { name: "base_speed", .. })
        ));
    }

    #[test]
    fn test_negative_base_speed_is_rejected() {
        let params = BoidParams {
            base_speed: -1.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(BuildError::InvalidParam {
                name: "base_speed",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_short_profile_is_reported_with_its_index() {
        let config = SchoolConfig {
            boids: vec![
                BoidSpec::new(Color::Gray, &SMALL_FISH),
                BoidSpec::new(Color::Gray, &[20.0]),
            ],
            ..Default::default()
        };

        match config.validate() {
            Err(ConfigError::InvalidBoid { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, BuildError::ProfileTooShort(1));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bundled_population_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/school.ron");
        let config = SchoolConfig::load(&path).unwrap();

        assert_eq!(config.boids.len(), 8);
        assert_eq!(config.boids[4].color, Color::Rgb(230, 120, 40));
        assert_eq!(config.params, BoidParams::default());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = SchoolConfig::load(Path::new("/definitely/not/here.ron"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
