//! TOML configuration files plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dungeon_core::GenerationConfig;

pub fn load(path: &Path) -> Result<GenerationConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

pub fn parse(content: &str) -> Result<GenerationConfig> {
    let config: GenerationConfig = toml::from_str(content)?;
    Ok(config)
}

/// Values given on the command line win over the file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub room_count: Option<usize>,
    pub room_type_count: Option<usize>,
    pub rng_seed: Option<u64>,
    pub walk_step_limit: Option<u64>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: GenerationConfig) -> GenerationConfig {
        if let Some(room_count) = self.room_count {
            config.room_count = room_count;
        }
        if let Some(room_type_count) = self.room_type_count {
            config.room_type_count = room_type_count;
        }
        if let Some(seed) = self.rng_seed {
            config.rng_seed = Some(seed);
        }
        if let Some(limit) = self.walk_step_limit {
            config.walk_step_limit = Some(limit);
        }
        config
    }
}
