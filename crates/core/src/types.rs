use serde::{Deserialize, Serialize};

/// Integer lattice coordinate of a room. `z` is the second horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub z: i32,
}

impl Coord {
    pub const ORIGIN: Self = Self { x: 0, z: 0 };

    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub fn manhattan_from_origin(self) -> u32 {
        self.x.unsigned_abs() + self.z.unsigned_abs()
    }

    /// Lattice neighbours in placement order: left, right, up, down.
    pub fn neighbors(self) -> [Self; 4] {
        [
            Self { x: self.x - 1, z: self.z },
            Self { x: self.x + 1, z: self.z },
            Self { x: self.x, z: self.z + 1 },
            Self { x: self.x, z: self.z - 1 },
        ]
    }
}

/// Row/column index into the generation grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

/// Cardinal side of a room. North points towards larger `z` (larger grid row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Walk order used by corridor carving: left, right, up, down.
    pub(crate) const WALK_ORDER: [Self; 4] = [Self::West, Self::East, Self::North, Self::South];

    pub const fn row_col_delta(self) -> (isize, isize) {
        match self {
            Self::North => (1, 0),
            Self::East => (0, 1),
            Self::South => (-1, 0),
            Self::West => (0, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

/// Which sides of a room face an open corridor cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorStates {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl DoorStates {
    pub fn is_open(self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, direction: Direction, open: bool) {
        match direction {
            Direction::North => self.north = open,
            Direction::East => self.east = open,
            Direction::South => self.south = open,
            Direction::West => self.west = open,
        }
    }

    pub fn open_count(self) -> usize {
        Direction::ALL.into_iter().filter(|&direction| self.is_open(direction)).count()
    }

    /// Packs the flags as `NESW` bits, north in bit 0.
    pub fn bits(self) -> u8 {
        u8::from(self.north)
            | (u8::from(self.east) << 1)
            | (u8::from(self.south) << 2)
            | (u8::from(self.west) << 3)
    }
}
