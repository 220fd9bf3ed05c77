pub mod config;
pub mod dungeon;
pub mod error;
pub mod rng;
pub mod types;

pub use config::{GenerationConfig, MAX_ROOM_TYPE_COUNT, RoomExtent};
pub use dungeon::{
    Bounds, CORRIDOR, Cell, DungeonGenerator, GenerationResult, Grid, Room, RoomPlacement, WALL,
    door_states_at, generate,
};
pub use error::{ConfigError, GenerationError, InternalConsistencyError};
pub use rng::{RandomSource, SeededRng};
pub use types::*;
