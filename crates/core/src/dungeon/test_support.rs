//! Shared fixtures for the `dungeon` submodule test suites.

use std::collections::{BTreeSet, VecDeque};

use crate::rng::RandomSource;
use crate::types::{Direction, GridPos};

use super::grid::{Cell, Grid};

/// Replays a fixed list of indices; every draw must be in range.
pub(super) struct Scripted {
    picks: Vec<usize>,
    pub(super) next: usize,
}

impl Scripted {
    pub(super) fn new(picks: &[usize]) -> Self {
        Self { picks: picks.to_vec(), next: 0 }
    }
}

impl RandomSource for Scripted {
    fn next_u64(&mut self) -> u64 {
        0
    }

    fn below(&mut self, bound: usize) -> usize {
        let pick = self.picks[self.next];
        self.next += 1;
        assert!(pick < bound, "scripted pick {pick} out of range {bound}");
        pick
    }
}

/// Open cells (corridors and rooms) reachable from `start` by 4-adjacency.
pub(super) fn reachable_open_cells(grid: &Grid, start: GridPos) -> BTreeSet<GridPos> {
    let mut open = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);
    while let Some(pos) = open.pop_front() {
        for direction in Direction::ALL {
            let Some(next) = grid.step(pos, direction, 1) else {
                continue;
            };
            if seen.contains(&next) || !grid.cell(next).is_some_and(Cell::is_open) {
                continue;
            }
            seen.insert(next);
            open.push_back(next);
        }
    }
    seen
}
