//! Stage-by-stage construction of one dungeon from a random stream.

use tracing::debug;

use crate::error::InternalConsistencyError;
use crate::rng::RandomSource;

use super::super::bounds::Bounds;
use super::super::corridors::carve_corridors;
use super::super::doors::resolve_placements;
use super::super::grid::build_grid_layout;
use super::super::model::GenerationResult;
use super::super::placement::place_rooms;

pub(super) struct PipelineInputs {
    pub(super) seed: u64,
    pub(super) room_count: usize,
    pub(super) room_type_count: usize,
    pub(super) walk_step_limit: u64,
}

pub(super) fn build_dungeon(
    inputs: &PipelineInputs,
    rng: &mut impl RandomSource,
) -> Result<GenerationResult, InternalConsistencyError> {
    let mut rooms = place_rooms(inputs.room_count, inputs.room_type_count, rng);
    debug!(rooms = rooms.len(), "placed rooms");

    // Spawn is always present, so the room list is never empty.
    let bounds = Bounds::of_rooms(&rooms).unwrap_or_default();
    let mut layout = build_grid_layout(&rooms, &bounds)?;
    debug!(
        ?bounds,
        width = layout.grid.width(),
        height = layout.grid.height(),
        "stamped rooms into grid"
    );

    let stats = carve_corridors(&mut layout, &mut rooms, inputs.walk_step_limit, rng)?;
    debug!(walks = stats.walks, steps = stats.steps, "carved corridors");

    let grid = layout.grid;
    let placements = resolve_placements(&grid, &rooms);
    Ok(GenerationResult { seed: inputs.seed, bounds, grid, rooms, placements })
}
