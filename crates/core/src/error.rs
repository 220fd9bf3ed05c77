//! Error types for configuration validation and generation failures.

use thiserror::Error;

use crate::types::{Coord, GridPos};

/// Top-level error returned by [`crate::generate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Internal(#[from] InternalConsistencyError),
}

/// Rejected configuration. Reported before any generation work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("room type catalog is empty; room_type_count must be at least 1")]
    EmptyRoomCatalog,

    #[error("walk_step_limit must be positive")]
    ZeroWalkStepLimit,

    #[error("room_type_count = {count} exceeds the grid encoding limit of {max}")]
    RoomCatalogTooLarge { count: usize, max: usize },

    #[error("room {dimension} = {value} is out of range [{min}, {max}]")]
    RoomExtentOutOfRange { dimension: &'static str, value: f32, min: f32, max: f32 },
}

/// A logic defect detected during generation. The run is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalConsistencyError {
    #[error("rooms at {first:?} and {second:?} resolve to the same grid cell {cell:?}")]
    OverlappingRooms { first: Coord, second: Coord, cell: GridPos },

    #[error("corridor walk from {start:?} is stuck at {at:?} with no room in reach")]
    WalkDeadEnd { start: Coord, at: GridPos },

    #[error("corridor walk from {start:?} exceeded {limit} steps without reaching spawn")]
    WalkStepLimitExceeded { start: Coord, limit: u64 },

    #[error("room type {id} at {cell:?} does not fit in a grid cell")]
    RoomTypeUnencodable { id: usize, cell: GridPos },

    #[error("grid cell {cell:?} holds a room id but no room is registered there")]
    UnregisteredRoomCell { cell: GridPos },
}
