//! Read-only projection of which room sides face a carved corridor.

use crate::types::{Direction, DoorStates, GridPos};

use super::grid::{CORRIDOR, Grid};
use super::model::{Room, RoomPlacement};

pub fn door_states_at(grid: &Grid, cell: GridPos) -> DoorStates {
    let mut doors = DoorStates::default();
    for direction in Direction::ALL {
        let open = grid
            .step(cell, direction, 1)
            .and_then(|neighbor| grid.get(neighbor))
            .is_some_and(|value| value == CORRIDOR);
        doors.set(direction, open);
    }
    doors
}

pub(crate) fn resolve_placements(grid: &Grid, rooms: &[Room]) -> Vec<RoomPlacement> {
    rooms
        .iter()
        .map(|room| RoomPlacement {
            room_id: room.id,
            coord: room.coord,
            open_directions: door_states_at(grid, grid.cell_of(room.coord)),
        })
        .collect()
}
