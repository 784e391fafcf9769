use crate::domain::{Grid, StepStrategy, Topology};
use crate::error::{Error, Result};

/// Grid dimensions the preset catalog is laid out for
pub const DEFAULT_GRID_WIDTH: usize = 200;
pub const DEFAULT_GRID_HEIGHT: usize = 150;

/// Chance of a cell starting alive when randomizing
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.5;

/// What seeding does with pattern cells that land outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutOfBoundsPolicy {
    /// Silently skip them; patterns may hang off a small grid.
    #[default]
    Drop,
    /// Fail the seed with `Error::OutOfBounds` and leave the grid as it was.
    Reject,
}

/// Construction parameters for a `SimulationEngine`
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    pub topology: Topology,
    /// Whether `tick` advances generations straight away
    pub start_running: bool,
    pub alive_probability: f64,
    pub strategy: StepStrategy,
    pub out_of_bounds: OutOfBoundsPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            topology: Topology::Toroidal,
            start_running: false,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            strategy: StepStrategy::default(),
            out_of_bounds: OutOfBoundsPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn with_running(mut self, running: bool) -> Self {
        self.start_running = running;
        self
    }

    pub fn with_alive_probability(mut self, probability: f64) -> Self {
        self.alive_probability = probability;
        self
    }

    pub fn with_strategy(mut self, strategy: StepStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_out_of_bounds(mut self, policy: OutOfBoundsPolicy) -> Self {
        self.out_of_bounds = policy;
        self
    }

    /// Check everything the engine cannot recover from later
    pub fn validate(&self) -> Result<()> {
        if Grid::cell_count(self.width, self.height).is_none() {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(Error::InvalidProbability(self.alive_probability));
        }
        Ok(())
    }
}
