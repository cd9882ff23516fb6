//! Throughput measurement for evolution and structure search

use std::time::Instant;

use life_scan::domain::{ConwayRule, Grid, StructureLibrary};

fn benchmark_evolve(size: usize, iterations: u32) -> f64 {
    let rule = ConwayRule;
    let mut grid = Grid::new(size, size).randomize();

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve(&rule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_evolve_parallel(size: usize, iterations: u32) -> f64 {
    let rule = ConwayRule;
    let mut grid = Grid::new(size, size).randomize();

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve_parallel(&rule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_find_all(size: usize, iterations: u32) -> f64 {
    let library = StructureLibrary::with_presets().expect("stock structures are well-formed");
    let grid = Grid::new(size, size).randomize();

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = library.find_all(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Life-Scan Performance Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Size", "Evolve", "Evolve+Par", "FindAll", "Speedup"
    );
    println!("{:-<60}", "");

    for size in sizes {
        let serial_ms = benchmark_evolve(size, iterations);
        let parallel_ms = benchmark_evolve_parallel(size, iterations);
        let search_ms = benchmark_find_all(size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            search_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 1024x1024 ===\n");

    let cells = 1024 * 1024;
    let parallel_ms = benchmark_evolve_parallel(1024, iterations);
    println!(
        "Evolve+Par: {:.3} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
