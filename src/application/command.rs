use crate::domain::{Pattern, Topology};

/// Requests a host can send to the engine, one per call to
/// `SimulationEngine::apply`.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Clear the grid and seed a pattern, adopting its topology
    Seed(Pattern),
    Run,
    Pause,
    /// Pause, then advance exactly one generation
    SingleStep,
    Clear,
    /// Random soup; `Some(seed)` makes it reproducible, `None` uses the
    /// thread RNG
    Randomize(Option<u64>),
    SetTopology(Topology),
    /// Periodic host tick: advances one generation only while running
    Tick,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Seed(_) => "seed",
            Command::Run => "run",
            Command::Pause => "pause",
            Command::SingleStep => "single",
            Command::Clear => "clear",
            Command::Randomize(_) => "random",
            Command::SetTopology(_) => "topology",
            Command::Tick => "tick",
        }
    }
}
