mod command;
mod engine;

pub use command::Command;
pub use engine::SimulationEngine;
