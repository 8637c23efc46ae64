//! Toroidal Life CLI - Run the simulation headless from JSON configuration.
//!
//! A windowed host would poll input and upload `current_bytes` every frame;
//! this driver seeds a few classic patterns by painting them, then runs the
//! tick loop at full speed and reports population stats.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use toroidal_life::{
    engine::{Cell, LifeEngine, SimulationStats, TickInput},
    schema::SimulationConfig,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a headless Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations to run (default: 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");

        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    println!("Toroidal Life");
    println!("=============");
    println!("Grid: {}x{} (toroidal)", config.width, config.height);
    println!("Generations: {}", generations);
    println!();

    let mut engine = LifeEngine::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    seed_patterns(&mut engine);
    engine.publish();

    let initial = SimulationStats::from_engine(&engine);
    println!("Initial state:");
    println!(
        "  Alive cells: {}/{}",
        initial.alive_cells, initial.total_cells
    );
    println!();

    engine.set_paused(false);

    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..generations {
        engine.tick(&TickInput::default());

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            let stats = SimulationStats::from_engine(&engine);
            let elapsed = start.elapsed().as_secs_f32();
            let gens_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Generation {}/{}: alive={}, {:.1} gens/s",
                i + 1,
                generations,
                stats.alive_cells,
                gens_per_sec
            );
        }
    }

    let final_stats = SimulationStats::from_engine(&engine);
    println!();
    println!("Final state:");
    println!(
        "  Alive cells: {}/{}",
        final_stats.alive_cells, final_stats.total_cells
    );
    println!("  Generations computed: {}", final_stats.generation);
    println!("  Elapsed: {:.2}s", start.elapsed().as_secs_f32());
}

/// Paint a glider and a blinker near the top-left corner.
fn seed_patterns(engine: &mut LifeEngine) {
    // Glider
    for (x, y) in [(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)] {
        engine.paint(x, y, Cell::Alive);
    }

    // Blinker, offset away from the glider's path
    for (x, y) in [(10, 8), (11, 8), (12, 8)] {
        engine.paint(x, y, Cell::Alive);
    }
}

fn print_example_config() {
    let config = SimulationConfig::default();
    println!(
        "{}",
        serde_json::to_string_pretty(&config).expect("default config serializes")
    );
}
