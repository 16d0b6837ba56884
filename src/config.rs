//! Simulation configuration.
//!
//! [`LifeConfig`] is the structured record a front end fills in: every
//! setting is an explicit field, unset ones are `None`. [`LifeConfig::resolve`]
//! validates it and fills in defaults, producing a [`Setup`] with concrete
//! grid dimensions and one anchored placement per pattern file.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::life::{Grid, Life, Topology};
use crate::pattern::{self, Anchor};

pub const DEFAULT_PIXEL_WIDTH: u32 = 800;
pub const DEFAULT_PIXEL_HEIGHT: u32 = 600;
pub const DEFAULT_CELL_SIZE: u32 = 8;
/// Pixel edge lengths a cell may have.
pub const CELL_SIZES: [u32; 4] = [2, 4, 8, 16];

/// An extra pattern file with its own optional anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSource {
    pub path: PathBuf,
    /// `None` places the pattern at the grid center.
    pub anchor: Option<Anchor>,
}

/// Configuration for one simulation run.
///
/// Use `LifeConfig::default()` and the builder methods, then
/// [`build`](Self::build) to get a seeded engine.
#[derive(Clone, Debug)]
pub struct LifeConfig {
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Pixel edge of one cell; must be one of [`CELL_SIZES`].
    pub cell_size: u32,
    pub topology: Topology,
    /// Primary pattern file. Required.
    pub pattern: Option<PathBuf>,
    /// Primary anchor as a pair. Conflicts with `offset_x` and `offset_y`.
    pub offset: Option<Anchor>,
    pub offset_x: Option<i32>,
    pub offset_y: Option<i32>,
    pub second: Option<PatternSource>,
    pub third: Option<PatternSource>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            pixel_width: DEFAULT_PIXEL_WIDTH,
            pixel_height: DEFAULT_PIXEL_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            topology: Topology::default(),
            pattern: None,
            offset: None,
            offset_x: None,
            offset_y: None,
            second: None,
            third: None,
        }
    }
}

impl LifeConfig {
    pub fn pixel_size(mut self, width: u32, height: u32) -> Self {
        self.pixel_width = width;
        self.pixel_height = height;
        self
    }

    pub fn cell_size(mut self, size: u32) -> Self {
        self.cell_size = size;
        self
    }

    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn pattern(mut self, path: impl Into<PathBuf>) -> Self {
        self.pattern = Some(path.into());
        self
    }

    pub fn offset(mut self, anchor: Anchor) -> Self {
        self.offset = Some(anchor);
        self
    }

    pub fn offset_x(mut self, x: i32) -> Self {
        self.offset_x = Some(x);
        self
    }

    pub fn offset_y(mut self, y: i32) -> Self {
        self.offset_y = Some(y);
        self
    }

    pub fn second(mut self, path: impl Into<PathBuf>, anchor: Option<Anchor>) -> Self {
        self.second = Some(PatternSource {
            path: path.into(),
            anchor,
        });
        self
    }

    pub fn third(mut self, path: impl Into<PathBuf>, anchor: Option<Anchor>) -> Self {
        self.third = Some(PatternSource {
            path: path.into(),
            anchor,
        });
        self
    }

    /// Validate and fill in defaults.
    pub fn resolve(&self) -> Result<Setup, ConfigError> {
        if !CELL_SIZES.contains(&self.cell_size) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        let width = (self.pixel_width / self.cell_size) as usize;
        let height = (self.pixel_height / self.cell_size) as usize;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.pixel_width,
                height: self.pixel_height,
                cell_size: self.cell_size,
            });
        }

        let path = self.pattern.clone().ok_or(ConfigError::MissingPattern)?;
        if self.offset.is_some() {
            if self.offset_x.is_some() {
                return Err(ConfigError::ConflictingOffset {
                    combined: "offset",
                    separate: "offset_x",
                });
            }
            if self.offset_y.is_some() {
                return Err(ConfigError::ConflictingOffset {
                    combined: "offset",
                    separate: "offset_y",
                });
            }
        }

        let center = Anchor::center(width, height);
        let primary = self.offset.unwrap_or(Anchor {
            x: self.offset_x.unwrap_or(center.x),
            y: self.offset_y.unwrap_or(center.y),
        });

        let mut placements = vec![Placement {
            path,
            anchor: primary,
        }];
        for source in [&self.second, &self.third].into_iter().flatten() {
            placements.push(Placement {
                path: source.path.clone(),
                anchor: source.anchor.unwrap_or(center),
            });
        }

        Ok(Setup {
            width,
            height,
            topology: self.topology,
            placements,
        })
    }

    /// Resolve, allocate and seed in one go.
    pub fn build(&self) -> Result<Life> {
        self.resolve()?.build()
    }
}

/// A pattern file and where to put it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub path: PathBuf,
    pub anchor: Anchor,
}

/// Validated configuration with every default filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setup {
    /// Columns (`d1`).
    pub width: usize,
    /// Rows (`d2`).
    pub height: usize,
    pub topology: Topology,
    /// Primary pattern first, then any extras in order.
    pub placements: Vec<Placement>,
}

impl Setup {
    pub fn placement_paths(&self) -> impl Iterator<Item = &Path> {
        self.placements.iter().map(|p| p.path.as_path())
    }

    /// Allocate the grid and stamp every pattern onto it.
    pub fn build(&self) -> Result<Life> {
        let mut grid = Grid::new(self.width, self.height)?;
        for placement in &self.placements {
            pattern::load(&placement.path, &mut grid, placement.anchor)?;
        }
        log::debug!(
            "seeded {}x{} {} grid with {} live cells from {} pattern file(s)",
            self.width,
            self.height,
            self.topology,
            grid.population(),
            self.placements.len()
        );
        Life::new(grid, self.topology)
    }
}
