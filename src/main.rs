//! Headless driver: seeds a preset and runs it for a number of generations.
//!
//! Usage: `life [PRESET] [GENERATIONS]`, verbosity via `RUST_LOG`.

use std::process::ExitCode;

use life_engine::{Command, EngineConfig, Error, SimulationEngine, presets};
use log::{error, info};

const DEFAULT_PRESET: &str = "Twogun";
const DEFAULT_GENERATIONS: u64 = 100;

fn run(preset: &str, generations: u64) -> Result<(), Error> {
    let pattern = presets::find(preset).ok_or_else(|| Error::UnknownPreset(preset.to_owned()))?;
    let mut engine = SimulationEngine::new(&EngineConfig::default())?;

    engine.apply(Command::Seed(pattern.clone()))?;
    info!(
        "{} on a {:?} {} grid, population {}",
        pattern.name,
        engine.dimensions(),
        engine.topology().name(),
        engine.population()
    );

    engine.apply(Command::Run)?;
    while engine.generation() < generations {
        engine.apply(Command::Tick)?;
        if engine.generation() % 10 == 0 {
            info!("generation {:>6}: population {}", engine.generation(), engine.population());
        }
    }

    println!(
        "{}: {} live cells after {} generations",
        pattern.name,
        engine.population(),
        engine.generation()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let preset = args.next().unwrap_or_else(|| DEFAULT_PRESET.to_owned());
    let generations = match args.next().map(|s| s.parse::<u64>()) {
        None => DEFAULT_GENERATIONS,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            error!("generation count: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&preset, generations) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            if matches!(e, Error::UnknownPreset(_)) {
                let names: Vec<_> = presets::all_patterns().into_iter().map(|p| p.name).collect();
                eprintln!("available presets: {}", names.join(", "));
            }
            ExitCode::FAILURE
        }
    }
}
