//! Selection of how a generation is computed.
//!
//! Both strategies read only the previous generation and write only the
//! scratch buffer, so they always agree cell for cell. `Parallel` splits the
//! scratch buffer into rows and hands them to rayon; the step still returns
//! only once the whole generation is written.

/// Available step implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepStrategy {
    /// Row by row on the calling thread
    #[default]
    Serial,
    /// Rows evaluated on the rayon thread pool
    Parallel,
}

impl StepStrategy {
    /// Get all available strategies
    pub fn all() -> Vec<StepStrategy> {
        vec![StepStrategy::Serial, StepStrategy::Parallel]
    }

    /// Display name for logs and benchmark tables
    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Serial",
            StepStrategy::Parallel => "Parallel",
        }
    }

    /// Short description
    pub fn description(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "cell enum buffers, one thread",
            StepStrategy::Parallel => "cell enum buffers, rows split across rayon workers",
        }
    }
}
