//! Corridor carving: random walks from each unconnected room until a
//! connected room is reached.

use tracing::trace;

use crate::error::InternalConsistencyError;
use crate::rng::RandomSource;
use crate::types::{Direction, GridPos};

use super::grid::{CORRIDOR, Cell, GridLayout};
use super::model::Room;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct CarveStats {
    pub(crate) walks: usize,
    pub(crate) steps: u64,
}

/// Connects every room to spawn. Rooms are visited in slice order; a room
/// marked connected by an earlier walk is skipped.
pub(crate) fn carve_corridors(
    layout: &mut GridLayout,
    rooms: &mut [Room],
    walk_step_limit: u64,
    rng: &mut impl RandomSource,
) -> Result<CarveStats, InternalConsistencyError> {
    let mut stats = CarveStats::default();
    for start in 0..rooms.len() {
        if rooms[start].visited {
            continue;
        }
        let chain = walk_to_connected_room(layout, rooms, start, walk_step_limit, rng)?;
        stats.walks += 1;
        stats.steps += chain.steps;
        trace!(
            start = ?rooms[start].coord,
            steps = chain.steps,
            rooms_joined = chain.rooms.len(),
            "corridor walk reached a connected room"
        );
        for index in chain.rooms {
            rooms[index].visited = true;
        }
    }
    Ok(stats)
}

struct WalkedChain {
    rooms: Vec<usize>,
    steps: u64,
}

fn walk_to_connected_room(
    layout: &mut GridLayout,
    rooms: &[Room],
    start: usize,
    walk_step_limit: u64,
    rng: &mut impl RandomSource,
) -> Result<WalkedChain, InternalConsistencyError> {
    let origin = rooms[start].coord;
    let mut chain = vec![start];
    let mut current = layout.grid.cell_of(origin);
    let mut steps = 0_u64;

    loop {
        if steps >= walk_step_limit {
            return Err(InternalConsistencyError::WalkStepLimitExceeded {
                start: origin,
                limit: walk_step_limit,
            });
        }
        let (direction, target) = choose_room_step(layout, current, rng)
            .ok_or(InternalConsistencyError::WalkDeadEnd { start: origin, at: current })?;
        steps += 1;

        if let Some(wall) = layout.grid.step(current, direction, 1) {
            layout.grid.set(wall, CORRIDOR);
        }
        let reached = layout
            .room_index_at(target)
            .ok_or(InternalConsistencyError::UnregisteredRoomCell { cell: target })?;
        if !chain.contains(&reached) {
            chain.push(reached);
        }
        current = target;

        if rooms[reached].visited {
            return Ok(WalkedChain { rooms: chain, steps });
        }
    }
}

/// Draws directions without replacement until one lands two cells away on a
/// room. Returns `None` when no direction does.
fn choose_room_step(
    layout: &GridLayout,
    current: GridPos,
    rng: &mut impl RandomSource,
) -> Option<(Direction, GridPos)> {
    let mut remaining = Direction::WALK_ORDER.to_vec();
    while !remaining.is_empty() {
        let pick = rng.below(remaining.len());
        let direction = remaining[pick];
        if let Some(target) = layout.grid.step(current, direction, 2)
            && matches!(layout.grid.cell(target), Some(Cell::Room { .. }))
        {
            return Some((direction, target));
        }
        remaining.remove(pick);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::bounds::Bounds;
    use crate::dungeon::grid::{WALL, build_grid_layout};
    use crate::dungeon::placement::place_rooms;
    use crate::dungeon::test_support::{Scripted, reachable_open_cells};
    use crate::rng::SeededRng;
    use crate::types::Coord;

    fn layout_for(rooms: &[Room]) -> GridLayout {
        let bounds = Bounds::of_rooms(rooms).expect("rooms present");
        build_grid_layout(rooms, &bounds).expect("layout")
    }

    #[test]
    fn spawn_only_layout_needs_no_walks() {
        let mut rooms = vec![Room::spawn()];
        let mut layout = layout_for(&rooms);
        let stats =
            carve_corridors(&mut layout, &mut rooms, 16, &mut Scripted::new(&[])).expect("carve");
        assert_eq!(stats, CarveStats::default());
        assert_eq!(layout.grid.corridor_count(), 0);
    }

    #[test]
    fn neighbor_of_spawn_opens_the_shared_wall() {
        let mut rooms = vec![Room::spawn(), Room::new(1, Coord::new(1, 0))];
        let mut layout = layout_for(&rooms);
        // Walk order is West, East, North, South; West from (1,0) is spawn.
        let mut rng = Scripted::new(&[0]);
        let stats = carve_corridors(&mut layout, &mut rooms, 16, &mut rng).expect("carve");

        assert_eq!(stats, CarveStats { walks: 1, steps: 1 });
        assert_eq!(layout.grid.get(GridPos { row: 1, col: 2 }), Some(CORRIDOR));
        assert_eq!(layout.grid.corridor_count(), 1);
        assert!(rooms.iter().all(|room| room.visited));
    }

    #[test]
    fn walk_marks_every_room_it_passes_through() {
        // A line of rooms: spawn, (1,0), (2,0). The walk from (1,0) detours
        // through (2,0) before reaching spawn, so one walk connects both.
        let mut rooms = vec![
            Room::spawn(),
            Room::new(1, Coord::new(1, 0)),
            Room::new(1, Coord::new(2, 0)),
        ];
        let mut layout = layout_for(&rooms);
        // Walk from (1,0): [W,E,N,S] pick 1 = East -> (2,0), unvisited.
        // From (2,0): pick 0 = West -> (1,0), unvisited, already in chain.
        // From (1,0): pick 0 = West -> spawn, done.
        let mut rng = Scripted::new(&[1, 0, 0]);
        let stats = carve_corridors(&mut layout, &mut rooms, 16, &mut rng).expect("carve");

        assert_eq!(stats, CarveStats { walks: 1, steps: 3 });
        assert_eq!(rng.next, 3);
        assert!(rooms.iter().all(|room| room.visited));
        assert_eq!(layout.grid.get(GridPos { row: 1, col: 2 }), Some(CORRIDOR));
        assert_eq!(layout.grid.get(GridPos { row: 1, col: 4 }), Some(CORRIDOR));
    }

    #[test]
    fn isolated_room_is_a_dead_end() {
        let mut rooms = vec![Room::spawn(), Room::new(1, Coord::new(2, 0))];
        let mut layout = layout_for(&rooms);
        let result = carve_corridors(&mut layout, &mut rooms, 16, &mut SeededRng::from_seed(1));
        assert_eq!(
            result,
            Err(InternalConsistencyError::WalkDeadEnd {
                start: Coord::new(2, 0),
                at: GridPos { row: 1, col: 5 },
            })
        );
    }

    #[test]
    fn step_limit_aborts_long_walks() {
        let mut rooms = vec![
            Room::spawn(),
            Room::new(1, Coord::new(1, 0)),
            Room::new(1, Coord::new(2, 0)),
        ];
        let mut layout = layout_for(&rooms);
        // East to (2,0), then West back to (1,0): two steps, no spawn reached.
        let mut rng = Scripted::new(&[1, 0]);
        let result = carve_corridors(&mut layout, &mut rooms, 2, &mut rng);
        assert_eq!(
            result,
            Err(InternalConsistencyError::WalkStepLimitExceeded { start: Coord::new(1, 0), limit: 2 })
        );
    }

    #[test]
    fn carving_leaves_room_cells_and_lattice_corners_alone() {
        let mut rooms = place_rooms(60, 3, &mut SeededRng::from_seed(31));
        let before: Vec<(GridPos, usize)> = layout_for(&rooms).grid.room_cells().collect();
        let mut layout = layout_for(&rooms);
        carve_corridors(&mut layout, &mut rooms, 1 << 24, &mut SeededRng::from_seed(32))
            .expect("carve");

        let after: Vec<(GridPos, usize)> = layout.grid.room_cells().collect();
        assert_eq!(before, after);
        for row in 0..layout.grid.height() {
            for col in 0..layout.grid.width() {
                let pos = GridPos { row, col };
                if row % 2 == 0 && col % 2 == 0 {
                    assert_eq!(layout.grid.get(pos), Some(WALL), "lattice corner {pos:?} carved");
                }
            }
        }
    }

    #[test]
    fn carved_grid_reaches_every_room_from_spawn() {
        for seed in [3_u64, 17, 256, 9_001] {
            let mut rooms = place_rooms(45, 4, &mut SeededRng::from_seed(seed));
            let mut layout = layout_for(&rooms);
            carve_corridors(&mut layout, &mut rooms, 1 << 24, &mut SeededRng::from_seed(seed))
                .expect("carve");

            let spawn_cell = layout.grid.cell_of(Coord::ORIGIN);
            let reached = reachable_open_cells(&layout.grid, spawn_cell);
            for room in &rooms {
                assert!(room.visited, "room {:?} left unconnected (seed {seed})", room.coord);
                assert!(reached.contains(&layout.grid.cell_of(room.coord)));
            }
        }
    }
}
