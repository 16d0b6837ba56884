//! Error types for klein-life.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid or missing configuration. Always fatal: nothing is simulated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No primary pattern file was given.
    #[error("no pattern file given; a primary pattern is required")]
    MissingPattern,

    /// A combined anchor was given together with a separate x or y anchor.
    #[error("offset {combined} cannot be combined with offset {separate}")]
    ConflictingOffset {
        /// The combined `x,y` option.
        combined: &'static str,
        /// The separate axis option that collides with it.
        separate: &'static str,
    },

    /// Cell size outside the supported set.
    #[error("cell size {0} is not supported (expected 2, 4, 8 or 16)")]
    InvalidCellSize(u32),

    /// Topology token did not name a known edge treatment.
    #[error("unknown edge treatment {0:?} (expected hedge, torus or klein)")]
    InvalidTopology(String),

    /// Pixel dimensions too small for even one cell on an axis.
    #[error("{width}x{height} pixels at cell size {cell_size} leaves no cells")]
    EmptyGrid {
        /// Pixel width.
        width: u32,
        /// Pixel height.
        height: u32,
        /// Pixel edge of one cell.
        cell_size: u32,
    },

    /// Anchor text was not of the form `X,Y`.
    #[error("malformed offset {0:?} (expected X,Y)")]
    MalformedOffset(String),
}

/// Errors produced while configuring, allocating or seeding a simulation.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Cell or scratch storage could not be obtained.
    #[error("cannot allocate a {width}x{height} grid")]
    Allocation {
        /// Columns requested.
        width: usize,
        /// Rows requested.
        height: usize,
    },

    /// A pattern file could not be opened or read.
    #[error("cannot read pattern file {}: {source}", path.display())]
    File {
        /// Path as given by the caller.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A pattern line was not a coordinate pair.
    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        /// File the line came from.
        path: PathBuf,
        /// 1-based line number within the file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;
