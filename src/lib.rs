//! Fixed-grid Conway's Game of Life (B3/S23) with bounded, toroidal and
//! Klein-bottle edges, seeded from coordinate-list pattern files.

pub mod config;
pub mod error;
pub mod life;
pub mod pattern;

pub use config::{LifeConfig, PatternSource, Setup};
pub use error::{ConfigError, LifeError};
pub use life::{Grid, Life, Topology};
pub use pattern::{Anchor, Pattern};
