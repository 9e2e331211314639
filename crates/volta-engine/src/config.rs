use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the engine, provided by the embedding application.
/// Loaded from JSON or built in code; validated before the first frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of electrons in the wire pool.
    pub particle_count: usize,
    /// Seed for per-particle entropy (lateral lanes, vibration phases).
    pub seed: u64,
    /// Top-left corner of the conductor loop in world units.
    pub loop_origin: [f32; 2],
    /// Horizontal extent of the loop.
    pub loop_width: f32,
    /// Vertical extent of the loop.
    pub loop_height: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            particle_count: 1000,
            seed: 42,
            loop_origin: [100.0, 100.0],
            loop_width: 635.0,
            loop_height: 385.0,
        }
    }
}

/// Rejected configurations. All are fatal at construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("particle count must be positive")]
    ZeroParticles,
    #[error("loop dimensions must be positive (got {width} x {height})")]
    InvalidLoopSize { width: f32, height: f32 },
}

impl EngineConfig {
    /// Parse a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the config for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        if self.loop_width <= 0.0 || self.loop_height <= 0.0 {
            return Err(ConfigError::InvalidLoopSize {
                width: self.loop_width,
                height: self.loop_height,
            });
        }
        Ok(())
    }
}
