mod cell;
mod generation;
mod grid;
mod patterns;
mod strategy;
mod topology;
pub mod rle;

pub use cell::Cell;
pub use generation::Generation;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rle::{Decoder, LiveRun, RleDocument, Runs};
pub use strategy::StepStrategy;
pub use topology::Topology;
