use serde::Deserialize;
use thiserror::Error;

pub const CANVAS_ID: &str = "starfield";
pub const CONFIG_ATTR: &str = "data-starfield-config";

// Tracker lines are drawn at half of the time modulator
pub const TRACKER_ALPHA: f64 = 0.5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub star_count: usize,
    pub star_speed: f64,
    pub star_size: f64, // px

    // Trackers ("fireworks")
    pub max_trackers: usize, // exclusive
    pub star_track_distance: f64,

    // Delays (s)
    pub initial_delay: f64,
    pub min_delay: f64,
    pub max_delay: f64,

    // Duration (s)
    pub min_duration: f64,
    pub max_duration: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: 1000,
            star_speed: 0.0015,
            star_size: 1.5,
            max_trackers: 5,
            star_track_distance: 0.05,
            initial_delay: 2.5,
            min_delay: 2.0,
            max_delay: 20.0,
            min_duration: 4.0,
            max_duration: 9.0,
        }
    }
}

impl Config {
    // Missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.star_count == 0 {
            return Err(ConfigError::Invalid("star_count must be at least 1"));
        }
        let non_negative = [
            self.star_speed,
            self.star_size,
            self.star_track_distance,
            self.initial_delay,
            self.min_delay,
            self.max_delay,
            self.min_duration,
            self.max_duration,
        ];
        if non_negative.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::Invalid("numeric values must be finite and >= 0"));
        }
        if self.min_delay > self.max_delay {
            return Err(ConfigError::Invalid("min_delay exceeds max_delay"));
        }
        if self.min_duration > self.max_duration {
            return Err(ConfigError::Invalid("min_duration exceeds max_duration"));
        }
        Ok(())
    }
}
