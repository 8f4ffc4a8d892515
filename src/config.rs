/// Runtime configuration, read from a TOML file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::compute::SPAWN_MARGIN;
use crate::entities::Arena;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let arena = Arena::default();
        Self {
            width: arena.width,
            height: arena.height,
        }
    }
}

impl From<ArenaConfig> for Arena {
    fn from(c: ArenaConfig) -> Self {
        Arena {
            width: c.width,
            height: c.height,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena: ArenaConfig,
    /// Milliseconds per simulation tick.
    pub frame_ms: u64,
    pub star_count: usize,
    /// Frames a key counts as held after its last press or repeat.
    pub hold_window: u64,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            frame_ms: 16,
            star_count: 100,
            hold_window: 4,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.arena.width.is_finite() || !(self.arena.width > 2.0 * SPAWN_MARGIN) {
            return Err(ConfigError::Invalid(format!(
                "arena.width must be finite and exceed {}, got {}",
                2.0 * SPAWN_MARGIN,
                self.arena.width
            )));
        }
        if !self.arena.height.is_finite() || !(self.arena.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "arena.height must be finite and positive, got {}",
                self.arena.height
            )));
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::Invalid("frame_ms must be at least 1".into()));
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        self.arena.into()
    }
}
