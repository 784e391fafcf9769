use thiserror::Error;

/// All kinds of errors the engine can report.
///
/// None of these are transient: every variant is an input-validation error
/// and retrying the same call gives the same result.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Width or height of zero, or more cells than can be addressed.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A character outside the RLE alphabet (digits, `b`, `o`, `$`, `!`).
    #[error("malformed pattern: unexpected {found:?} at offset {offset}")]
    MalformedPattern { offset: usize, found: char },

    /// A run count too large to address.
    #[error("malformed pattern: run count at offset {offset} is too large")]
    RunCountOverflow { offset: usize },

    /// A direct write outside the grid.
    #[error("cell ({col}, {row}) is outside the {width}x{height} grid")]
    OutOfBounds {
        col: isize,
        row: isize,
        width: usize,
        height: usize,
    },

    /// Fill probability for randomization outside `[0, 1]`.
    #[error("cell probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    /// No preset with that name in the pattern catalog.
    #[error("unknown preset {0:?}")]
    UnknownPreset(String),

    /// Unparseable `x = .., y = ..` line in an RLE document.
    #[error("invalid RLE header: {0}")]
    InvalidHeader(String),
}

pub type Result<T> = std::result::Result<T, Error>;
