// Domain layer - grid, rule, pattern decoding
pub mod domain;

// Application layer - engine state and host commands
pub mod application;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use application::{Command, SimulationEngine};
pub use config::{EngineConfig, OutOfBoundsPolicy};
pub use domain::{Cell, Generation, Grid, Pattern, StepStrategy, Topology, presets};
pub use error::{Error, Result};
