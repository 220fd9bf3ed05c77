//! Random-walk room placement that grows outward from the spawn room.

use std::collections::{HashMap, HashSet};

use crate::rng::RandomSource;
use crate::types::Coord;

use super::model::{Room, SPAWN_ROOM_ID};

/// Unclaimed coordinates next to placed rooms. Keeps insertion order for
/// reproducible indexed draws and removes by swapping with the last entry.
#[derive(Debug, Default)]
struct CandidateSet {
    order: Vec<Coord>,
    slots: HashMap<Coord, usize>,
}

impl CandidateSet {
    fn len(&self) -> usize {
        self.order.len()
    }

    fn insert(&mut self, coord: Coord) {
        if self.slots.contains_key(&coord) {
            return;
        }
        self.slots.insert(coord, self.order.len());
        self.order.push(coord);
    }

    fn take(&mut self, index: usize) -> Coord {
        let coord = self.order.swap_remove(index);
        self.slots.remove(&coord);
        if let Some(&moved) = self.order.get(index) {
            self.slots.insert(moved, index);
        }
        coord
    }
}

/// Places `room_count` rooms around spawn and returns them sorted by
/// distance from the origin. Spawn is always first.
pub(crate) fn place_rooms(
    room_count: usize,
    room_type_count: usize,
    rng: &mut impl RandomSource,
) -> Vec<Room> {
    let mut rooms = Vec::with_capacity(room_count + 1);
    rooms.push(Room::spawn());
    let mut occupied = HashSet::from([Coord::ORIGIN]);
    let mut candidates = CandidateSet::default();

    for _ in 0..room_count {
        let newest = rooms[rooms.len() - 1].coord;
        for neighbor in newest.neighbors() {
            if !occupied.contains(&neighbor) {
                candidates.insert(neighbor);
            }
        }

        let coord = candidates.take(rng.below(candidates.len()));
        let id = draw_room_type(room_type_count, rng);
        occupied.insert(coord);
        rooms.push(Room::new(id, coord));
    }

    rooms.sort_by_key(|room| room.coord.manhattan_from_origin());
    rooms
}

/// Type `0` belongs to spawn, so it is only handed out when it is the sole type.
fn draw_room_type(room_type_count: usize, rng: &mut impl RandomSource) -> usize {
    if room_type_count <= 1 {
        return SPAWN_ROOM_ID;
    }
    1 + rng.below(room_type_count - 1)
}
