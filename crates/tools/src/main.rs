use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_core::{DungeonGenerator, GenerationConfig, RoomExtent};
use tools::config_file::{self, ConfigOverrides};
use tools::snapshot_file::{SnapshotFile, format_fingerprint};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with generation settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of rooms to place besides spawn
    #[arg(short, long)]
    rooms: Option<usize>,
    /// Size of the room type catalog (type 0 is the spawn type)
    #[arg(short = 't', long)]
    room_types: Option<usize>,
    #[arg(short, long)]
    seed: Option<u64>,
    /// Per-walk cap on corridor steps
    #[arg(long)]
    walk_step_limit: Option<u64>,
    /// World width of one room, used to print world positions
    #[arg(long, requires = "room_length")]
    room_width: Option<f32>,
    /// World length of one room, used to print world positions
    #[arg(long, requires = "room_width")]
    room_length: Option<f32>,
    /// Write the JSON snapshot here
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            room_count: self.rooms,
            room_type_count: self.room_types,
            rng_seed: self.seed,
            walk_step_limit: self.walk_step_limit,
        }
    }

    fn room_extent(&self) -> Result<Option<RoomExtent>> {
        match (self.room_width, self.room_length) {
            (Some(width), Some(length)) => Ok(Some(RoomExtent::new(width, length)?)),
            _ => Ok(None),
        }
    }
}

fn main() -> Result<()> {
    tools::logging::init();
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => config_file::load(path)?,
        None => GenerationConfig::default(),
    };
    let config = args.overrides().apply(base);
    let extent = args.room_extent()?;

    let generator = DungeonGenerator::new(config).context("Invalid generation config")?;
    let result = generator.generate().context("Dungeon generation failed")?;

    println!("Generation complete.");
    println!("Seed: {}", result.seed);
    println!("Rooms: {}", result.rooms.len());
    println!("Grid: {}x{}", result.grid.height(), result.grid.width());
    println!("Corridors: {}", result.corridor_count());
    println!("Fingerprint: {}", format_fingerprint(result.fingerprint()));

    if let Some(extent) = extent {
        for placement in &result.placements {
            let (world_x, world_z) = extent.world_position(placement.coord);
            let doors = placement.open_directions;
            println!(
                "room type={} at ({}, {}) world=({world_x:.1}, {world_z:.1}) doors N={} E={} S={} W={}",
                placement.room_id,
                placement.coord.x,
                placement.coord.z,
                doors.north,
                doors.east,
                doors.south,
                doors.west
            );
        }
    }

    if let Some(path) = &args.output {
        SnapshotFile::new(generator.config().clone(), result)
            .write_atomic(path)
            .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
        println!("Snapshot written to {}", path.display());
    }

    Ok(())
}
