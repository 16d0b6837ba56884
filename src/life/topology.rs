//! Edge treatments and Moore-neighborhood resolution.
//!
//! A neighbor offset applied to an edge cell can land one step outside the
//! grid on either axis. Each [`Topology`] decides where that step goes:
//! - `Bounded`: nowhere; the neighbor does not exist.
//! - `Toroidal`: to the opposite edge on the same axis.
//! - `Klein`: rows wrap like a torus; crossing a column edge also mirrors the
//!   row, giving the half-twist of a Klein bottle.

use std::fmt;
use std::str::FromStr;

use super::grid::Grid;
use crate::error::ConfigError;

/// The 8 cardinal and intercardinal directions of the Moore neighborhood.
///
/// Rows grow downward, so `North` is `j - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    North = 0, // (i, j-1)
    South = 1, // (i, j+1)
    West  = 2, // (i-1, j)
    East  = 3, // (i+1, j)
    NW    = 4, // (i-1, j-1)
    NE    = 5, // (i+1, j-1)
    SW    = 6, // (i-1, j+1)
    SE    = 7, // (i+1, j+1)
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North, Direction::South,
        Direction::West,  Direction::East,
        Direction::NW,    Direction::NE,
        Direction::SW,    Direction::SE,
    ];

    /// The `(di, dj)` offset for this direction.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West  => (-1, 0),
            Direction::East  => (1, 0),
            Direction::NW    => (-1, -1),
            Direction::NE    => (1, -1),
            Direction::SW    => (-1, 1),
            Direction::SE    => (1, 1),
        }
    }
}

/// How the grid's edges connect. Chosen once per run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Hard edges: off-grid neighbors are never counted.
    Bounded,
    /// Opposite edges joined with no orientation change.
    #[default]
    Toroidal,
    /// Top/bottom joined plainly, left/right joined with a vertical flip.
    Klein,
}

/// Fold a coordinate that is at most one step off-grid back onto `[0, len)`.
/// Returns the folded value and whether it crossed an edge.
#[inline(always)]
fn wrap(n: isize, len: usize) -> (usize, bool) {
    if n < 0 {
        (len - 1, true)
    } else if n as usize == len {
        (0, true)
    } else {
        (n as usize, false)
    }
}

impl Topology {
    pub const ALL: [Topology; 3] = [Topology::Bounded, Topology::Toroidal, Topology::Klein];

    /// Resolve the neighbor of `(i, j)` in direction `dir` on a
    /// `width` x `height` grid. `None` means the neighbor is excluded.
    #[inline(always)]
    pub fn resolve(
        self,
        width: usize,
        height: usize,
        i: usize,
        j: usize,
        dir: Direction,
    ) -> Option<(usize, usize)> {
        debug_assert!(i < width && j < height);
        let (di, dj) = dir.offset();
        let ni = i as isize + di;
        let nj = j as isize + dj;

        match self {
            Topology::Bounded => {
                if ni < 0 || nj < 0 || ni as usize >= width || nj as usize >= height {
                    None
                } else {
                    Some((ni as usize, nj as usize))
                }
            }
            Topology::Toroidal => Some((wrap(ni, width).0, wrap(nj, height).0)),
            Topology::Klein => {
                let (rj, _) = wrap(nj, height);
                match wrap(ni, width) {
                    (ri, false) => Some((ri, rj)),
                    (ri, true) => Some((ri, (height - 1) - rj)),
                }
            }
        }
    }

    /// Every resolved neighbor of `(i, j)`, in `Direction::ALL` order.
    /// Bounded edge cells yield fewer than 8.
    pub fn neighbors(
        self,
        width: usize,
        height: usize,
        i: usize,
        j: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.resolve(width, height, i, j, dir))
    }

    /// Live neighbors of `(i, j)` in `grid`, in `[0, 8]`.
    #[inline]
    pub fn count_neighbors(self, grid: &Grid, i: usize, j: usize) -> u8 {
        let (width, height) = (grid.width(), grid.height());
        let mut count = 0u8;
        for dir in Direction::ALL {
            if let Some((ni, nj)) = self.resolve(width, height, i, j, dir) {
                count += grid.get(ni, nj);
            }
        }
        count
    }
}

/// Parses by first letter, ignoring case: `h`edge or `b`ounded, `t`orus,
/// `k`lein.
impl FromStr for Topology {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('h') | Some('b') => Ok(Topology::Bounded),
            Some('t') => Ok(Topology::Toroidal),
            Some('k') => Ok(Topology::Klein),
            _ => Err(ConfigError::InvalidTopology(s.to_string())),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Topology::Bounded => "bounded",
            Topology::Toroidal => "torus",
            Topology::Klein => "klein",
        })
    }
}
