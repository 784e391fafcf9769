use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Command;
use crate::config::{EngineConfig, OutOfBoundsPolicy};
use crate::domain::{Cell, Generation, Grid, Pattern, StepStrategy, Topology, rle};
use crate::error::{Error, Result};

/// SimulationEngine orchestrates the simulation.
///
/// It owns exactly one grid plus the paused/running flag. Every call runs to
/// completion before returning and nothing happens between calls, so a host
/// drives cadence by calling `tick` from its own timer. Callers sharing an
/// engine across threads must serialize access to it.
#[derive(Debug)]
pub struct SimulationEngine {
    grid: Grid,
    running: bool,
    generation: u64,
    strategy: StepStrategy,
    alive_probability: f64,
    out_of_bounds: OutOfBoundsPolicy,
}

impl SimulationEngine {
    /// Create an engine with an all-dead grid
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height, config.topology)?;
        debug!(
            "created {}x{} {} engine ({})",
            config.width,
            config.height,
            config.topology.name(),
            config.strategy.name()
        );
        Ok(Self {
            grid,
            running: config.start_running,
            generation: 0,
            strategy: config.strategy,
            alive_probability: config.alive_probability,
            out_of_bounds: config.out_of_bounds,
        })
    }

    /// Default configuration with the given dimensions and topology
    pub fn with_dimensions(width: usize, height: usize, topology: Topology) -> Result<Self> {
        Self::new(&EngineConfig::new(width, height).with_topology(topology))
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub const fn topology(&self) -> Topology {
        self.grid.topology()
    }

    pub fn set_topology(&mut self, topology: Topology) {
        if topology != self.grid.topology() {
            debug!("topology {} -> {}", self.grid.topology().name(), topology.name());
        }
        self.grid.set_topology(topology);
    }

    pub const fn strategy(&self) -> StepStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: StepStrategy) {
        self.strategy = strategy;
    }

    /// Read-only view of the underlying grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Independent copy of the current generation
    pub fn current_generation(&self) -> Generation {
        self.grid.snapshot()
    }

    /// Completed steps since the last seed, clear or randomize
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn run(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Replace the whole grid with an RLE pattern placed at `origin`.
    ///
    /// Runs are clipped to the grid as they are decoded and written into a
    /// staging grid, so memory is bounded by the grid whatever the run
    /// counts say. The live grid is only replaced once the whole pattern
    /// has decoded, so on error it keeps its previous contents. Returns the
    /// number of live cells after seeding.
    pub fn seed(&mut self, text: &str, origin: (isize, isize)) -> Result<usize> {
        let (width, height) = self.grid.dimensions();
        let (w, h) = (width as isize, height as isize);
        let mut staged = Grid::new(width, height, self.grid.topology())?;
        let mut dropped: usize = 0;

        for run in rle::decode_runs(text, origin) {
            let run = run?;
            let row_inside = (0..h).contains(&run.row);
            let (start, end) = (run.col.clamp(0, w), run.end().clamp(0, w));
            let kept = if row_inside { (end - start).max(0) } else { 0 };

            if kept < run.len {
                if self.out_of_bounds == OutOfBoundsPolicy::Reject {
                    // First cell of the run, in decode order, that misses the grid
                    let col = if row_inside && run.col >= 0 { run.col.max(w) } else { run.col };
                    return Err(Error::OutOfBounds { col, row: run.row, width, height });
                }
                dropped = dropped.saturating_add((run.len - kept) as usize);
            }
            for col in start..start + kept {
                staged.set(col, run.row, Cell::Alive)?;
            }
        }

        if dropped > 0 {
            debug!("dropped {dropped} pattern cells outside the {width}x{height} grid");
        }
        staged.sync_buffers();
        self.grid = staged;
        self.generation = 0;

        let population = self.grid.population();
        debug!("seeded {population} live cells at {origin:?}");
        Ok(population)
    }

    /// Seed a catalog pattern at its own origin and adopt its topology
    pub fn seed_pattern(&mut self, pattern: &Pattern) -> Result<usize> {
        let population = self.seed(&pattern.rle, pattern.origin)?;
        self.set_topology(pattern.topology);
        debug!("loaded pattern {:?}", pattern.name);
        Ok(population)
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Random soup using the configured alive probability
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.grid.randomize(rng, self.alive_probability)?;
        self.generation = 0;
        Ok(())
    }

    /// Random soup from the thread-local RNG
    pub fn randomize_from_entropy(&mut self) -> Result<()> {
        self.randomize(&mut rand::rng())
    }

    /// Reproducible random soup: the same seed always gives the same grid
    pub fn randomize_from_seed(&mut self, seed: u64) -> Result<()> {
        self.randomize(&mut StdRng::seed_from_u64(seed))
    }

    /// Advance exactly one generation, whether running or paused
    pub fn step(&mut self) {
        self.grid.advance(self.strategy);
        self.generation += 1;
        trace!("generation {} population {}", self.generation, self.grid.population());
    }

    /// Host timer callback: steps only while running.
    /// Returns whether a generation was computed.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.step();
        }
        self.running
    }

    /// Dispatch a host command. Returns whether a generation was computed.
    pub fn apply(&mut self, command: Command) -> Result<bool> {
        trace!("command {}", command.name());
        match command {
            Command::Seed(pattern) => {
                self.seed_pattern(&pattern)?;
            }
            Command::Run => self.run(),
            Command::Pause => self.pause(),
            Command::SingleStep => {
                self.pause();
                self.step();
                return Ok(true);
            }
            Command::Clear => self.clear(),
            Command::Randomize(Some(seed)) => self.randomize_from_seed(seed)?,
            Command::Randomize(None) => self.randomize_from_entropy()?,
            Command::SetTopology(topology) => self.set_topology(topology),
            Command::Tick => return Ok(self.tick()),
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn engine(width: usize, height: usize, topology: Topology) -> SimulationEngine {
        SimulationEngine::with_dimensions(width, height, topology).unwrap()
    }

    fn live(engine: &SimulationEngine) -> BTreeSet<(usize, usize)> {
        engine.current_generation().live_cells().collect()
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            SimulationEngine::with_dimensions(0, 0, Topology::Bounded).unwrap_err(),
            Error::InvalidDimensions { width: 0, height: 0 }
        );
    }

    #[test]
    fn test_seed_glider() {
        let mut engine = engine(10, 10, Topology::Bounded);
        assert_eq!(engine.seed("bob$2bo$3o!", (0, 0)), Ok(5));
        assert_eq!(live(&engine), BTreeSet::from([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]));
    }

    #[test]
    fn test_seed_overwrites_previous_pattern() {
        let mut engine = engine(20, 20, Topology::Bounded);
        engine.seed("5o$5o$5o!", (0, 0)).unwrap();
        engine.seed("2o$2o!", (10, 10)).unwrap();
        assert_eq!(live(&engine), BTreeSet::from([(10, 10), (11, 10), (10, 11), (11, 11)]));
    }

    #[test]
    fn test_seed_resets_generation() {
        let mut engine = engine(8, 8, Topology::Toroidal);
        engine.seed("3o!", (2, 2)).unwrap();
        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 2);
        engine.seed("3o!", (2, 2)).unwrap();
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_malformed_pattern_leaves_grid_unchanged() {
        let mut engine = engine(10, 10, Topology::Bounded);
        engine.seed("2o$2o!", (1, 1)).unwrap();
        let before = engine.current_generation();
        assert!(matches!(engine.seed("3o$x!", (0, 0)), Err(Error::MalformedPattern { found: 'x', .. })));
        assert_eq!(engine.current_generation(), before);
    }

    #[test]
    fn test_out_of_range_cells_dropped_by_default() {
        let mut engine = engine(4, 4, Topology::Bounded);
        assert_eq!(engine.seed("6o$6o!", (2, 3)), Ok(2));
        assert_eq!(live(&engine), BTreeSet::from([(2, 3), (3, 3)]));
        assert_eq!(engine.seed("o!", (-1, 0)), Ok(0));
    }

    #[test]
    fn test_out_of_range_cells_rejected_on_request() {
        let config = EngineConfig::new(4, 4).with_out_of_bounds(OutOfBoundsPolicy::Reject);
        let mut engine = SimulationEngine::new(&config).unwrap();
        engine.seed("o!", (0, 0)).unwrap();
        assert_eq!(
            engine.seed("6o!", (0, 1)),
            Err(Error::OutOfBounds { col: 4, row: 1, width: 4, height: 4 })
        );
        assert_eq!(live(&engine), BTreeSet::from([(0, 0)]));
    }

    #[test]
    fn test_huge_run_clipped_without_expanding() {
        let mut engine = engine(4, 4, Topology::Bounded);
        assert_eq!(engine.seed("100000000o$100000000o!", (0, 0)), Ok(8));
        assert_eq!(live(&engine), BTreeSet::from([
            (0, 0), (1, 0), (2, 0), (3, 0),
            (0, 1), (1, 1), (2, 1), (3, 1),
        ]));
    }

    #[test]
    fn test_runs_hanging_off_the_left_edge() {
        let mut engine = engine(4, 4, Topology::Bounded);
        assert_eq!(engine.seed("3o!", (-2, 1)), Ok(1));
        assert_eq!(live(&engine), BTreeSet::from([(0, 1)]));
        assert_eq!(engine.seed("o999999999$o!", (1, 0)), Ok(1));
    }

    #[test]
    fn test_huge_run_rejected_on_request() {
        let config = EngineConfig::new(4, 4).with_out_of_bounds(OutOfBoundsPolicy::Reject);
        let mut engine = SimulationEngine::new(&config).unwrap();
        assert_eq!(
            engine.seed("100000000o!", (1, 2)),
            Err(Error::OutOfBounds { col: 4, row: 2, width: 4, height: 4 })
        );
        assert_eq!(
            engine.seed("3o!", (-2, 0)),
            Err(Error::OutOfBounds { col: -2, row: 0, width: 4, height: 4 })
        );
        assert_eq!(
            engine.seed("o$o!", (0, 3)),
            Err(Error::OutOfBounds { col: 0, row: 4, width: 4, height: 4 })
        );
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_seed_keeps_topology() {
        let mut engine = engine(6, 6, Topology::Toroidal);
        engine.seed("o!", (0, 0)).unwrap();
        assert_eq!(engine.topology(), Topology::Toroidal);
    }

    #[test]
    fn test_randomize_command_with_seed_is_reproducible() {
        let mut a = engine(16, 16, Topology::Toroidal);
        let mut b = engine(16, 16, Topology::Toroidal);
        a.apply(Command::Randomize(Some(11))).unwrap();
        b.apply(Command::Randomize(Some(11))).unwrap();
        assert_eq!(a.current_generation(), b.current_generation());
        assert!(a.population() > 0);
    }

    #[test]
    fn test_seed_pattern_adopts_topology() {
        let mut engine = engine(200, 150, Topology::Toroidal);
        engine.seed_pattern(&presets::twogun()).unwrap();
        assert_eq!(engine.topology(), Topology::Bounded);
        engine.seed_pattern(&presets::glider()).unwrap();
        assert_eq!(engine.topology(), Topology::Toroidal);
        assert_eq!(engine.population(), 5);
    }

    #[test]
    fn test_tick_respects_running_flag() {
        let mut engine = engine(8, 8, Topology::Bounded);
        engine.seed("3o!", (2, 4)).unwrap();
        assert!(!engine.is_running());
        assert!(!engine.tick());
        assert_eq!(engine.generation(), 0);

        engine.run();
        assert!(engine.tick());
        assert_eq!(engine.generation(), 1);
        assert_eq!(live(&engine), BTreeSet::from([(3, 3), (3, 4), (3, 5)]));

        engine.pause();
        assert!(!engine.tick());
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_start_running_from_config() {
        let config = EngineConfig::new(5, 5).with_running(true);
        let engine = SimulationEngine::new(&config).unwrap();
        assert!(engine.is_running());
    }

    #[test]
    fn test_step_while_paused() {
        let mut engine = engine(8, 8, Topology::Bounded);
        engine.seed("3o!", (2, 4)).unwrap();
        engine.step();
        assert!(!engine.is_running());
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_commands() {
        let mut engine = engine(200, 150, Topology::Bounded);
        assert_eq!(engine.apply(Command::Seed(presets::glider())), Ok(false));
        assert_eq!(engine.apply(Command::Run), Ok(false));
        assert_eq!(engine.apply(Command::Tick), Ok(true));
        assert_eq!(engine.apply(Command::SingleStep), Ok(true));
        assert!(!engine.is_running());
        assert_eq!(engine.generation(), 2);
        assert_eq!(engine.apply(Command::Tick), Ok(false));
        assert_eq!(engine.apply(Command::SetTopology(Topology::Bounded)), Ok(false));
        assert_eq!(engine.topology(), Topology::Bounded);
        engine.apply(Command::Clear).unwrap();
        assert_eq!(engine.population(), 0);
        engine.apply(Command::Randomize(None)).unwrap();
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_clear_then_step_stays_dead() {
        let mut engine = engine(16, 16, Topology::Toroidal);
        engine.randomize(&mut StdRng::seed_from_u64(3)).unwrap();
        engine.clear();
        engine.step();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_randomize_uses_configured_probability() {
        let config = EngineConfig::new(10, 10).with_alive_probability(1.0);
        let mut engine = SimulationEngine::new(&config).unwrap();
        engine.randomize(&mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(engine.population(), 100);
    }

    #[test]
    fn test_step_is_deterministic() {
        let mut a = engine(30, 30, Topology::Toroidal);
        a.randomize(&mut StdRng::seed_from_u64(42)).unwrap();
        let mut b = engine(30, 30, Topology::Toroidal);
        b.randomize(&mut StdRng::seed_from_u64(42)).unwrap();
        b.set_strategy(StepStrategy::Parallel);
        for _ in 0..10 {
            a.step();
            b.step();
        }
        assert_eq!(a.current_generation(), b.current_generation());
    }

    #[test]
    fn test_snapshot_not_aliased() {
        let mut engine = engine(8, 8, Topology::Bounded);
        engine.seed("3o!", (2, 4)).unwrap();
        let before = engine.current_generation();
        engine.step();
        assert_eq!(before.live_cells().collect::<Vec<_>>(), vec![(2, 4), (3, 4), (4, 4)]);
    }

    proptest! {
        #[test]
        fn prop_seed_fully_overwrites(
            first in "([1-5]?[bo$]){1,20}!",
            second in "([1-5]?[bo$]){1,20}!",
            x in 0isize..10,
            y in 0isize..10,
        ) {
            let mut fresh = engine(32, 32, Topology::Toroidal);
            fresh.seed(&second, (x, y)).unwrap();

            let mut reused = engine(32, 32, Topology::Toroidal);
            reused.seed(&first, (0, 0)).unwrap();
            reused.step();
            reused.seed(&second, (x, y)).unwrap();

            prop_assert_eq!(reused.current_generation(), fresh.current_generation());
        }
    }
}
