//! Post-generation checks shared by the fuzz harness and its tests.

use std::collections::{BTreeSet, VecDeque};

use dungeon_core::{
    Cell, Coord, Direction, GenerationConfig, GenerationResult, GridPos, door_states_at,
};

pub fn check(config: &GenerationConfig, result: &GenerationResult) -> Result<(), String> {
    let seed = result.seed;
    if result.rooms.len() != config.room_count + 1 {
        return Err(format!(
            "Invariant failed: expected {} rooms, found {} (seed {seed})",
            config.room_count + 1,
            result.rooms.len()
        ));
    }

    let Some(spawn) = result.spawn() else {
        return Err(format!("Invariant failed: no spawn room (seed {seed})"));
    };
    if spawn.id != 0 {
        return Err(format!("Invariant failed: spawn has type {} (seed {seed})", spawn.id));
    }

    let coords: BTreeSet<Coord> = result.rooms.iter().map(|room| room.coord).collect();
    if coords.len() != result.rooms.len() {
        return Err(format!("Invariant failed: duplicate room coordinates (seed {seed})"));
    }

    let bounds = result.bounds;
    if let Some(room) = result.rooms.iter().find(|room| !bounds.contains(room.coord)) {
        return Err(format!(
            "Invariant failed: room {:?} lies outside {bounds:?} (seed {seed})",
            room.coord
        ));
    }
    let expected_height = 2 * bounds.span_z() + 1;
    let expected_width = 2 * bounds.span_x() + 1;
    if (result.grid.height(), result.grid.width()) != (expected_height, expected_width) {
        return Err(format!(
            "Invariant failed: grid is {}x{}, bounds imply {expected_height}x{expected_width} (seed {seed})",
            result.grid.height(),
            result.grid.width()
        ));
    }

    for (cell, id) in result.grid.room_cells() {
        let registered = result
            .grid
            .coordinate_at(cell)
            .and_then(|coord| result.rooms.iter().find(|room| room.coord == coord));
        if registered.map(|room| room.id) != Some(id) {
            return Err(format!(
                "Invariant failed: grid cell {cell:?} holds type {id} with no matching room (seed {seed})"
            ));
        }
    }

    if let Some(room) = result.rooms.iter().find(|room| !room.visited) {
        return Err(format!("Invariant failed: room {:?} never connected (seed {seed})", room.coord));
    }

    let reached = reachable_from(result, result.grid.cell_of(Coord::ORIGIN));
    for room in &result.rooms {
        if !reached.contains(&result.grid.cell_of(room.coord)) {
            return Err(format!(
                "Invariant failed: room {:?} unreachable from spawn (seed {seed})",
                room.coord
            ));
        }
    }

    for placement in &result.placements {
        let cell = result.grid.cell_of(placement.coord);
        if placement.open_directions != door_states_at(&result.grid, cell) {
            return Err(format!(
                "Invariant failed: door table disagrees with grid at {:?} (seed {seed})",
                placement.coord
            ));
        }
        if placement.open_directions.open_count() == 0 && result.rooms.len() > 1 {
            return Err(format!(
                "Invariant failed: room {:?} has no open door (seed {seed})",
                placement.coord
            ));
        }
    }

    Ok(())
}

fn reachable_from(result: &GenerationResult, start: GridPos) -> BTreeSet<GridPos> {
    let mut open = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);
    while let Some(pos) = open.pop_front() {
        for direction in Direction::ALL {
            let Some(next) = result.grid.step(pos, direction, 1) else {
                continue;
            };
            if seen.contains(&next) {
                continue;
            }
            if matches!(result.grid.cell(next), Some(Cell::Corridor | Cell::Room { .. })) {
                seen.insert(next);
                open.push_back(next);
            }
        }
    }
    seen
}
