//! High-level orchestration that validates configuration and runs the
//! placement, grid, corridor, and door stages in order.

mod pipeline;

use tracing::{debug, info};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::rng::{RandomSource, SeededRng};

use super::model::GenerationResult;
use super::seed::SeedChoice;
use pipeline::{PipelineInputs, build_dungeon};

/// A validated generation request.
#[derive(Clone, Debug)]
pub struct DungeonGenerator {
    config: GenerationConfig,
}

impl DungeonGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Runs with a ChaCha8 stream built from the configured seed, or a fresh
    /// runtime seed when none is set. The seed used is kept in the result.
    pub fn generate(&self) -> Result<GenerationResult, GenerationError> {
        let choice = SeedChoice::resolve(self.config.rng_seed);
        let seed = choice.value();
        debug!(seed, generated = choice.is_generated(), "resolved seed");
        let mut rng = SeededRng::from_seed(seed);
        self.generate_with(seed, &mut rng)
    }

    /// Runs with a caller-supplied random stream. `seed` is only recorded.
    pub fn generate_with(
        &self,
        seed: u64,
        rng: &mut impl RandomSource,
    ) -> Result<GenerationResult, GenerationError> {
        let inputs = PipelineInputs {
            seed,
            room_count: self.config.room_count,
            room_type_count: self.config.room_type_count,
            walk_step_limit: self.config.effective_walk_step_limit(),
        };
        let result = build_dungeon(&inputs, rng)?;
        info!(
            seed,
            rooms = result.rooms.len(),
            corridors = result.corridor_count(),
            fingerprint = result.fingerprint(),
            "generated dungeon"
        );
        Ok(result)
    }
}
