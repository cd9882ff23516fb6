//! CLI driver: runs the simulation at a bounded rate and reports the
//! structures detected in each generation.

use std::{fs, process, thread, time::Duration};

use life_scan::{SimConfig, SimState, StructureLibrary, presets};
use log::info;

fn load_config(args: &[String]) -> SimConfig {
    let Some(path) = args.get(1) else {
        return SimConfig::default();
    };

    let raw = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {e}");
        process::exit(1);
    });
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {e}");
        process::exit(1);
    })
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.get(1).is_some_and(|a| a == "--help") || args.len() > 3 {
        eprintln!("Usage: {} [config.json] [generations]", args[0]);
        process::exit(1);
    }

    let config = load_config(&args).clamped();
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let library = StructureLibrary::with_presets().unwrap_or_else(|e| {
        eprintln!("Error building structure library: {e}");
        process::exit(1);
    });

    let mut state = SimState::from_config(&config).toggle_running();

    // Seed a glider away from the edges so it has room to travel.
    let glider = presets::glider();
    glider.place_on(&mut state.grid, config.width / 4, config.height / 4);

    info!(
        "running {generations} generations on a {}x{} grid at up to {}/s",
        config.width, config.height, config.updates_per_second
    );

    let tick = Duration::from_secs_f64(1.0 / f64::from(config.updates_per_second));
    let mut total_matches = 0usize;

    while state.is_running && state.generation() < generations {
        let generation = state.step();

        let matches = library.find_all(&state.grid);
        for found in &matches {
            info!(
                "gen {generation}: {} at ({}, {}) size {}x{} rotation {}",
                found.name,
                found.x,
                found.y,
                found.width,
                found.height,
                found.rotation
            );
        }
        total_matches += matches.len();

        thread::sleep(tick);
    }

    println!(
        "{} generations, {} alive cells, {} structure match(es)",
        state.generation(),
        state.grid.count_alive(),
        total_matches
    );
}
