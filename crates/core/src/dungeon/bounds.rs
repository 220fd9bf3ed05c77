//! Axis-aligned bounding box over placed room coordinates.

use serde::{Deserialize, Serialize};

use crate::types::Coord;

use super::model::Room;

/// Inclusive lattice extents. The default is the spawn-only box at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_z: i32,
    pub max_z: i32,
}

impl Bounds {
    /// Returns `None` only for an empty slice.
    pub fn of_rooms(rooms: &[Room]) -> Option<Self> {
        let first = rooms.first()?.coord;
        let seed = Self { min_x: first.x, max_x: first.x, min_z: first.z, max_z: first.z };
        Some(rooms.iter().fold(seed, |bounds, room| bounds.including(room.coord)))
    }

    fn including(self, coord: Coord) -> Self {
        Self {
            min_x: self.min_x.min(coord.x),
            max_x: self.max_x.max(coord.x),
            min_z: self.min_z.min(coord.z),
            max_z: self.max_z.max(coord.z),
        }
    }

    /// Lattice columns covered, inclusive of both ends.
    pub fn span_x(&self) -> usize {
        self.max_x.abs_diff(self.min_x) as usize + 1
    }

    pub fn span_z(&self) -> usize {
        self.max_z.abs_diff(self.min_z) as usize + 1
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (self.min_x..=self.max_x).contains(&coord.x) && (self.min_z..=self.max_z).contains(&coord.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_at(x: i32, z: i32) -> Room {
        Room::new(1, Coord::new(x, z))
    }

    #[test]
    fn empty_room_list_has_no_bounds() {
        assert_eq!(Bounds::of_rooms(&[]), None);
    }

    #[test]
    fn single_spawn_room_has_degenerate_bounds() {
        let bounds = Bounds::of_rooms(&[Room::spawn()]).expect("spawn present");
        assert_eq!(bounds, Bounds { min_x: 0, max_x: 0, min_z: 0, max_z: 0 });
        assert_eq!((bounds.span_x(), bounds.span_z()), (1, 1));
    }

    #[test]
    fn bounds_cover_extreme_coordinates() {
        let rooms = [Room::spawn(), room_at(-2, 1), room_at(3, -4), room_at(0, 2)];
        let bounds = Bounds::of_rooms(&rooms).expect("rooms present");
        assert_eq!(bounds, Bounds { min_x: -2, max_x: 3, min_z: -4, max_z: 2 });
        assert_eq!(bounds.span_x(), 6);
        assert_eq!(bounds.span_z(), 7);
        for room in &rooms {
            assert!(bounds.contains(room.coord));
        }
        assert!(!bounds.contains(Coord::new(4, 0)));
    }
}
