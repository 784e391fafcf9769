//! Performance benchmark comparing the step strategies

use std::time::Instant;

use life_engine::{EngineConfig, SimulationEngine, StepStrategy, Topology};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark(size: usize, strategy: StepStrategy, iterations: u32) -> Result<f64, life_engine::Error> {
    let config = EngineConfig::new(size, size)
        .with_topology(Topology::Toroidal)
        .with_strategy(strategy);
    let mut engine = SimulationEngine::new(&config)?;
    engine.randomize(&mut StdRng::seed_from_u64(size as u64))?;

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), life_engine::Error> {
    env_logger::init();
    println!("=== Life Engine Step Benchmark ===\n");

    let sizes = [100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, StepStrategy::Serial, iterations)?;
        let parallel_ms = benchmark(size, StepStrategy::Parallel, iterations)?;
        info!("{size}x{size}: serial {serial_ms:.2} ms, parallel {parallel_ms:.2} ms");

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    for strategy in StepStrategy::all() {
        println!("\n{:<10} {}", strategy.name(), strategy.description());
    }

    Ok(())
}
