//! Demo configuration.
//!
//! Board size, seeding policy, pacing and glyphs are all settings of the
//! demo, not of the engine. Values are read from an optional JSON file;
//! any field left out keeps its default.

use std::path::Path;
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::SeedPlan;
use crate::error::{LifeError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Side length of the square board.
    pub board_size: usize,
    /// Number of blinkers scattered at startup.
    pub blinkers: usize,
    /// Number of gliders scattered at startup.
    pub gliders: usize,
    /// Pause between two frames, in milliseconds.
    pub frame_delay_ms: u64,
    /// Stop after this many generations; run forever when unset.
    pub max_generations: Option<u64>,
    /// Seed for the placement RNG; OS entropy when unset.
    pub seed: Option<u64>,
    pub alive_glyph: char,
    pub dead_glyph: char,
    /// Draw the `=` rulers and `|` sides around each frame.
    pub border: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            board_size: 55,
            blinkers: 3,
            gliders: 5,
            frame_delay_ms: 100,
            max_generations: None,
            seed: None,
            alive_glyph: '#',
            dead_glyph: ' ',
            border: true,
        }
    }
}

impl DemoConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| LifeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| LifeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults when no path is given, otherwise the file's contents
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(LifeError::InvalidConfig("board_size must be at least 1".into()));
        }
        if self.alive_glyph == self.dead_glyph {
            return Err(LifeError::InvalidConfig(format!(
                "alive_glyph and dead_glyph are both {:?}",
                self.alive_glyph
            )));
        }
        Ok(())
    }

    pub fn seed_plan(&self) -> SeedPlan {
        SeedPlan {
            blinkers: self.blinkers,
            gliders: self.gliders,
        }
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}
