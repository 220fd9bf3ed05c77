//! Generation inputs and their eager validation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Coord;

pub const DEFAULT_ROOM_COUNT: usize = 10;
pub const DEFAULT_ROOM_TYPE_COUNT: usize = 2;

/// Multiplier on `(rooms)^2` for the default per-walk step cap.
const WALK_STEP_LIMIT_FACTOR: u64 = 1024;

/// Room cells store `type + 1` as `i32`, so the largest type id is `i32::MAX - 1`.
pub const MAX_ROOM_TYPE_COUNT: usize = i32::MAX as usize;

pub const MIN_ROOM_EXTENT: f32 = 5.0;
pub const MAX_ROOM_EXTENT: f32 = 200.0;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Rooms to place besides spawn.
    pub room_count: usize,
    /// Size of the external room type catalog. Type `0` is the spawn type.
    pub room_type_count: usize,
    pub rng_seed: Option<u64>,
    /// Per-walk cap on room-to-room moves during corridor carving.
    pub walk_step_limit: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            room_count: DEFAULT_ROOM_COUNT,
            room_type_count: DEFAULT_ROOM_TYPE_COUNT,
            rng_seed: None,
            walk_step_limit: None,
        }
    }
}

impl GenerationConfig {
    pub fn new(room_count: usize, room_type_count: usize) -> Self {
        Self { room_count, room_type_count, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_walk_step_limit(mut self, limit: u64) -> Self {
        self.walk_step_limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_type_count < 1 {
            return Err(ConfigError::EmptyRoomCatalog);
        }
        if self.room_type_count > MAX_ROOM_TYPE_COUNT {
            return Err(ConfigError::RoomCatalogTooLarge {
                count: self.room_type_count,
                max: MAX_ROOM_TYPE_COUNT,
            });
        }
        if self.walk_step_limit == Some(0) {
            return Err(ConfigError::ZeroWalkStepLimit);
        }
        Ok(())
    }

    pub fn effective_walk_step_limit(&self) -> u64 {
        self.walk_step_limit.unwrap_or_else(|| {
            let rooms = self.room_count as u64 + 1;
            WALK_STEP_LIMIT_FACTOR.saturating_mul(rooms.saturating_mul(rooms))
        })
    }
}

/// World-space footprint of one lattice cell, used to place room prefabs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomExtent {
    pub width: f32,
    pub length: f32,
}

impl RoomExtent {
    pub fn new(width: f32, length: f32) -> Result<Self, ConfigError> {
        let extent = Self { width, length };
        extent.validate()?;
        Ok(extent)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (dimension, value) in [("width", self.width), ("length", self.length)] {
            if !(MIN_ROOM_EXTENT..=MAX_ROOM_EXTENT).contains(&value) {
                return Err(ConfigError::RoomExtentOutOfRange {
                    dimension,
                    value,
                    min: MIN_ROOM_EXTENT,
                    max: MAX_ROOM_EXTENT,
                });
            }
        }
        Ok(())
    }

    /// Scales a lattice coordinate: `x` by the room length, `z` by the room width.
    pub fn world_position(&self, coord: Coord) -> (f32, f32) {
        (coord.x as f32 * self.length, coord.z as f32 * self.width)
    }
}
