//! Coordinate-list pattern files.
//!
//! The first line is a header (typically `#Life 1.06`) and is never
//! inspected. Every later non-blank line holds one live cell as two
//! whitespace-separated signed integers, `x y`. A file is accepted whole or
//! rejected whole: one bad line means nothing from it reaches the grid.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::error::{ConfigError, LifeError, Result};
use crate::life::Grid;

/// Translation applied to every coordinate of a pattern before placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

impl Anchor {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The middle cell of a `width` x `height` grid.
    pub fn center(width: usize, height: usize) -> Self {
        Self {
            x: i32::try_from(width / 2).unwrap_or(i32::MAX),
            y: i32::try_from(height / 2).unwrap_or(i32::MAX),
        }
    }
}

/// Parses `X,Y`.
impl FromStr for Anchor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedOffset(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(malformed)?;
        let x = x.trim().parse().map_err(|_| malformed())?;
        let y = y.trim().parse().map_err(|_| malformed())?;
        Ok(Self { x, y })
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A rejected pattern line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct LineError {
    /// 1-based, counting the header.
    pub line: usize,
    pub reason: String,
}

/// Parsed live-cell offsets, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<(i32, i32)>,
}

fn parse_line(text: &str) -> std::result::Result<(i32, i32), String> {
    let mut fields = text.split_whitespace();
    let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
        return Err(format!("expected `x y`, found {text:?}"));
    };
    let extra = fields.count();
    if extra > 0 {
        return Err(format!("expected two coordinates, found {}", extra + 2));
    }
    let parse = |field: &str| {
        field
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate {field:?}: {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

impl Pattern {
    pub fn parse(text: &str) -> std::result::Result<Self, LineError> {
        Self::parse_bytes(text.as_bytes())
    }

    /// Like [`Pattern::parse`], but the header line may hold any bytes.
    /// Later lines must be UTF-8.
    pub fn parse_bytes(bytes: &[u8]) -> std::result::Result<Self, LineError> {
        let mut cells = Vec::new();
        for (idx, raw) in bytes.split(|&b| b == b'\n').enumerate().skip(1) {
            let line = std::str::from_utf8(raw)
                .map_err(|e| LineError {
                    line: idx + 1,
                    reason: format!("not valid UTF-8: {e}"),
                })?
                .trim();
            if line.is_empty() {
                continue;
            }
            let cell = parse_line(line).map_err(|reason| LineError {
                line: idx + 1,
                reason,
            })?;
            log::trace!("line {}: cell {:?}", idx + 1, cell);
            cells.push(cell);
        }
        Ok(Self { cells })
    }

    /// Read and parse a whole file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LifeError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_bytes(&bytes).map_err(|e| LifeError::Parse {
            path: path.to_path_buf(),
            line: e.line,
            reason: e.reason,
        })
    }

    pub fn from_cells(cells: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    pub fn cells(&self) -> &[(i32, i32)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Mark every cell alive at `anchor`, wrapping into the grid regardless
    /// of topology. Returns the grid cells touched, in pattern order.
    /// Existing life is kept, so repeated stamps only add cells.
    pub fn stamp(&self, grid: &mut Grid, anchor: Anchor) -> Vec<(usize, usize)> {
        let (width, height) = (grid.width(), grid.height());
        if width == 0 || height == 0 {
            log::warn!("pattern of {} cells dropped on an empty grid", self.len());
            return Vec::new();
        }

        let mut placed = Vec::with_capacity(self.cells.len());
        let mut seen = HashSet::with_capacity(self.cells.len());
        for &(x, y) in &self.cells {
            let i = normalize(x as i64 + anchor.x as i64, width);
            let j = normalize(y as i64 + anchor.y as i64, height);
            grid.set(i, j, true);
            seen.insert((i, j));
            placed.push((i, j));
        }

        let duplicates = placed.len() - seen.len();
        if duplicates > 0 {
            log::warn!("{duplicates} duplicate coordinates in pattern");
        }
        placed
    }
}

/// Fold `n` into `[0, len)`: raise negatives by whole multiples of `len`,
/// then reduce modulo `len`.
#[inline]
pub fn normalize(n: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    n.rem_euclid(len as i64) as usize
}

/// Read `path` and stamp it onto `grid` at `anchor`.
pub fn load(path: impl AsRef<Path>, grid: &mut Grid, anchor: Anchor) -> Result<Vec<(usize, usize)>> {
    let path = path.as_ref();
    let pattern = Pattern::from_file(path)?;
    let placed = pattern.stamp(grid, anchor);
    log::debug!(
        "stamped {} cells from {} at {anchor}",
        placed.len(),
        path.display()
    );
    Ok(placed)
}
