//! Room lattice generation split into placement, grid, corridor, and door stages.

pub mod model;

mod bounds;
mod corridors;
mod doors;
mod generator;
mod grid;
mod placement;
mod seed;
#[cfg(test)]
mod test_support;

pub use bounds::Bounds;
pub use doors::door_states_at;
pub use generator::DungeonGenerator;
pub use grid::{CORRIDOR, Cell, Grid, WALL};
pub use model::{GenerationResult, Room, RoomPlacement, SPAWN_ROOM_ID};
pub use seed::{SeedChoice, generate_runtime_seed};

use crate::config::GenerationConfig;
use crate::error::GenerationError;

pub fn generate(config: &GenerationConfig) -> Result<GenerationResult, GenerationError> {
    DungeonGenerator::new(config.clone())?.generate()
}

#[cfg(test)]
mod tests {
    use super::{DungeonGenerator, GenerationConfig};

    #[test]
    fn generate_matches_dungeon_generator_output() {
        let config = GenerationConfig::new(25, 3).with_seed(123);

        let from_helper = super::generate(&config).expect("helper generation");
        let from_generator = DungeonGenerator::new(config)
            .and_then(|generator| generator.generate())
            .expect("generator generation");

        assert_eq!(from_helper, from_generator);
    }
}
