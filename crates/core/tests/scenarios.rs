use dungeon_core::{
    CORRIDOR, Cell, ConfigError, Coord, Direction, GenerationConfig, GenerationError, GridPos,
    MAX_ROOM_TYPE_COUNT, generate,
};

#[test]
fn test_scenario_spawn_only_dungeon() {
    let result = generate(&GenerationConfig::new(0, 4).with_seed(1)).expect("generation failed");

    assert_eq!(result.rooms.len(), 1);
    let spawn = &result.rooms[0];
    assert_eq!((spawn.id, spawn.coord, spawn.visited), (0, Coord::ORIGIN, true));

    assert_eq!(result.grid.height(), 3);
    assert_eq!(result.grid.width(), 3);
    for row in 0..3 {
        for col in 0..3 {
            let expected = if (row, col) == (1, 1) { 1 } else { 0 };
            assert_eq!(result.grid.get(GridPos { row, col }), Some(expected));
        }
    }

    let doors = result.placements[0].open_directions;
    assert!(!doors.north && !doors.east && !doors.south && !doors.west);
}

#[test]
fn test_scenario_one_room_beside_spawn() {
    for seed in [3_u64, 14, 159, 2_653] {
        let result =
            generate(&GenerationConfig::new(1, 2).with_seed(seed)).expect("generation failed");
        assert_eq!(result.rooms.len(), 2);

        let other = &result.rooms[1];
        assert_eq!(other.id, 1);
        assert!(
            [Coord::new(1, 0), Coord::new(-1, 0), Coord::new(0, 1), Coord::new(0, -1)]
                .contains(&other.coord),
            "second room {:?} must touch spawn",
            other.coord
        );

        let spawn_cell = result.grid.cell_of(Coord::ORIGIN);
        let other_cell = result.grid.cell_of(other.coord);
        let between = GridPos {
            row: (spawn_cell.row + other_cell.row) / 2,
            col: (spawn_cell.col + other_cell.col) / 2,
        };
        assert_eq!(result.grid.get(between), Some(CORRIDOR));

        let facing = match (other.coord.x, other.coord.z) {
            (1, 0) => Direction::East,
            (-1, 0) => Direction::West,
            (0, 1) => Direction::North,
            _ => Direction::South,
        };
        assert!(result.placements[0].open_directions.is_open(facing));
        assert!(result.placements[1].open_directions.is_open(facing.opposite()));
    }
}

#[test]
fn test_scenario_empty_catalog_is_a_configuration_error() {
    let err = generate(&GenerationConfig::new(3, 0)).expect_err("zero types must be rejected");
    assert_eq!(err, GenerationError::Config(ConfigError::EmptyRoomCatalog));
}

#[test]
fn test_scenario_spawn_keeps_reserved_type_with_larger_catalog() {
    let result = generate(&GenerationConfig::new(30, 5).with_seed(42)).expect("generation failed");
    let spawn = result.spawn().expect("spawn present");
    assert_eq!(spawn.id, 0);
    for room in result.rooms.iter().filter(|room| !room.is_spawn()) {
        assert!((1..5).contains(&room.id), "room type {} outside 1..5", room.id);
    }
}

#[test]
fn test_scenario_catalog_beyond_grid_encoding_is_a_configuration_error() {
    let count = MAX_ROOM_TYPE_COUNT + 1;
    let err = generate(&GenerationConfig::new(30, count).with_seed(0))
        .expect_err("oversized catalog must be rejected");
    assert_eq!(
        err,
        GenerationError::Config(ConfigError::RoomCatalogTooLarge { count, max: MAX_ROOM_TYPE_COUNT })
    );
}

#[test]
fn test_scenario_largest_catalog_keeps_room_cells_positive() {
    for seed in 0..20_u64 {
        let config = GenerationConfig::new(30, MAX_ROOM_TYPE_COUNT).with_seed(seed);
        let result = generate(&config).expect("largest catalog should generate");
        for room in &result.rooms {
            let cell = result.grid.cell_of(room.coord);
            assert_eq!(result.grid.cell(cell), Some(Cell::Room { id: room.id }));
        }
    }
}
