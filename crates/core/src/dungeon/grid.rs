//! Doubled-resolution grid that stores rooms on odd cells and walls or
//! corridors on the lines between them.

use serde::{Deserialize, Serialize};

use crate::error::InternalConsistencyError;
use crate::types::{Coord, Direction, GridPos};

use super::bounds::Bounds;
use super::model::Room;

pub const WALL: i32 = 0;
pub const CORRIDOR: i32 = -1;

/// Typed view of a raw grid value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Corridor,
    Room { id: usize },
}

impl Cell {
    pub fn from_raw(value: i32) -> Self {
        match value {
            CORRIDOR => Self::Corridor,
            value if value > 0 => Self::Room { id: (value - 1) as usize },
            _ => Self::Wall,
        }
    }

    pub fn is_open(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    min_x: i32,
    min_z: i32,
    cells: Vec<i32>,
}

impl Grid {
    /// All-wall grid sized to hold every coordinate inside `bounds`.
    pub fn for_bounds(bounds: &Bounds) -> Self {
        let width = 2 * bounds.span_x() + 1;
        let height = 2 * bounds.span_z() + 1;
        Self {
            width,
            height,
            min_x: bounds.min_x,
            min_z: bounds.min_z,
            cells: vec![WALL; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn raw_cells(&self) -> &[i32] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn index(&self, pos: GridPos) -> usize {
        pos.row * self.width + pos.col
    }

    /// Raw value at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: GridPos) -> Option<i32> {
        self.in_bounds(pos).then(|| self.cells[self.index(pos)])
    }

    pub fn cell(&self, pos: GridPos) -> Option<Cell> {
        self.get(pos).map(Cell::from_raw)
    }

    pub(crate) fn set(&mut self, pos: GridPos, value: i32) {
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Grid cell of a lattice coordinate: `(2*(z-minZ)+1, 2*(x-minX)+1)`.
    pub fn cell_of(&self, coord: Coord) -> GridPos {
        GridPos {
            row: 2 * coord.z.abs_diff(self.min_z) as usize + 1,
            col: 2 * coord.x.abs_diff(self.min_x) as usize + 1,
        }
    }

    /// Lattice coordinate of a room cell. Returns `None` for even (wall line) indices.
    pub fn coordinate_at(&self, pos: GridPos) -> Option<Coord> {
        if !self.in_bounds(pos) || pos.row % 2 == 0 || pos.col % 2 == 0 {
            return None;
        }
        Some(Coord {
            x: ((pos.col - 1) / 2) as i32 + self.min_x,
            z: ((pos.row - 1) / 2) as i32 + self.min_z,
        })
    }

    /// Cell `distance` steps away in `direction`, if it lies inside the grid.
    pub fn step(&self, pos: GridPos, direction: Direction, distance: usize) -> Option<GridPos> {
        let (dr, dc) = direction.row_col_delta();
        let row = pos.row.checked_add_signed(dr * distance as isize)?;
        let col = pos.col.checked_add_signed(dc * distance as isize)?;
        let target = GridPos { row, col };
        self.in_bounds(target).then_some(target)
    }

    /// Room cells in row-major order with their type ids.
    pub fn room_cells(&self) -> impl Iterator<Item = (GridPos, usize)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).filter_map(move |col| {
                let pos = GridPos { row, col };
                match Cell::from_raw(self.cells[self.index(pos)]) {
                    Cell::Room { id } => Some((pos, id)),
                    _ => None,
                }
            })
        })
    }

    pub fn corridor_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == CORRIDOR).count()
    }
}

/// Grid with every room stamped in, plus the room index owning each room cell.
pub(crate) struct GridLayout {
    pub(crate) grid: Grid,
    room_slots: Vec<Option<usize>>,
}

impl GridLayout {
    /// Index into the room list of the room stamped at `pos`.
    pub(crate) fn room_index_at(&self, pos: GridPos) -> Option<usize> {
        if !self.grid.in_bounds(pos) {
            return None;
        }
        self.room_slots[self.grid.index(pos)]
    }
}

pub(crate) fn build_grid_layout(
    rooms: &[Room],
    bounds: &Bounds,
) -> Result<GridLayout, InternalConsistencyError> {
    let mut grid = Grid::for_bounds(bounds);
    let mut room_slots: Vec<Option<usize>> = vec![None; grid.cells.len()];

    for (room_index, room) in rooms.iter().enumerate() {
        let cell = grid.cell_of(room.coord);
        let slot = grid.index(cell);
        if let Some(previous) = room_slots[slot] {
            return Err(InternalConsistencyError::OverlappingRooms {
                first: rooms[previous].coord,
                second: room.coord,
                cell,
            });
        }
        let value = i32::try_from(room.id)
            .ok()
            .and_then(|id| id.checked_add(1))
            .ok_or(InternalConsistencyError::RoomTypeUnencodable { id: room.id, cell })?;
        room_slots[slot] = Some(room_index);
        grid.set(cell, value);
    }

    Ok(GridLayout { grid, room_slots })
}
