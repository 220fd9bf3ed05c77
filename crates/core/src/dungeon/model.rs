//! Public data models for placed rooms and finished generation runs.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Coord, DoorStates};

use super::bounds::Bounds;
use super::grid::Grid;

pub const SPAWN_ROOM_ID: usize = 0;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Index into the external room type catalog.
    pub id: usize,
    pub coord: Coord,
    /// Set once the room has a corridor path back to spawn.
    pub visited: bool,
}

impl Room {
    pub fn spawn() -> Self {
        Self { id: SPAWN_ROOM_ID, coord: Coord::ORIGIN, visited: true }
    }

    pub fn new(id: usize, coord: Coord) -> Self {
        Self { id, coord, visited: false }
    }

    pub fn is_spawn(&self) -> bool {
        self.coord == Coord::ORIGIN
    }
}

/// One entry of the table handed to the instantiation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPlacement {
    pub room_id: usize,
    pub coord: Coord,
    pub open_directions: DoorStates,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Seed the random stream was built from, whether configured or derived.
    pub seed: u64,
    pub bounds: Bounds,
    pub grid: Grid,
    /// Rooms sorted by distance from spawn.
    pub rooms: Vec<Room>,
    /// Door table in the same order as `rooms`.
    pub placements: Vec<RoomPlacement>,
}

impl GenerationResult {
    pub fn spawn(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.is_spawn())
    }

    pub fn corridor_count(&self) -> usize {
        self.grid.corridor_count()
    }

    /// Stable little-endian encoding of the seed, grid, rooms, and doors.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.to_le_bytes());
        bytes.extend(self.bounds.min_x.to_le_bytes());
        bytes.extend(self.bounds.max_x.to_le_bytes());
        bytes.extend(self.bounds.min_z.to_le_bytes());
        bytes.extend(self.bounds.max_z.to_le_bytes());
        bytes.extend((self.grid.width() as u32).to_le_bytes());
        bytes.extend((self.grid.height() as u32).to_le_bytes());
        for &cell in self.grid.raw_cells() {
            bytes.extend(cell.to_le_bytes());
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend((room.id as u32).to_le_bytes());
            bytes.extend(room.coord.x.to_le_bytes());
            bytes.extend(room.coord.z.to_le_bytes());
            bytes.push(u8::from(room.visited));
        }
        for placement in &self.placements {
            bytes.push(placement.open_directions.bits());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
