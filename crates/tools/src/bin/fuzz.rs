use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::{DungeonGenerator, GenerationConfig};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tools::invariants;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the stream that picks per-run seeds and sizes
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
    /// Largest room count to try
    #[arg(long, default_value_t = 200)]
    max_rooms: usize,
    /// Largest room type catalog to try
    #[arg(long, default_value_t = 8)]
    max_room_types: usize,
}

fn pick(rng: &mut ChaCha8Rng, upper_inclusive: usize) -> usize {
    (rng.next_u64() % (upper_inclusive as u64 + 1)) as usize
}

fn main() -> Result<()> {
    tools::logging::init();
    let args = Args::parse();
    if args.max_room_types == 0 {
        bail!("--max-room-types must be at least 1");
    }

    println!("Starting fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut total_rooms = 0usize;
    let mut total_corridors = 0usize;

    for run in 0..args.runs {
        let config = GenerationConfig {
            room_count: pick(&mut rng, args.max_rooms),
            room_type_count: 1 + pick(&mut rng, args.max_room_types - 1),
            rng_seed: Some(rng.next_u64()),
            walk_step_limit: None,
        };

        let generator = DungeonGenerator::new(config.clone())?;
        let result = match generator.generate() {
            Ok(result) => result,
            Err(err) => bail!("Run {run} failed with {config:?}: {err}"),
        };
        if let Err(violation) = invariants::check(&config, &result) {
            bail!("Run {run} with {config:?}: {violation}");
        }

        total_rooms += result.rooms.len();
        total_corridors += result.corridor_count();
    }

    println!(
        "Fuzzing completed successfully: {} rooms, {} corridor cells.",
        total_rooms, total_corridors
    );
    Ok(())
}
