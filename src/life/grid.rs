//! Fixed-size cell storage.
//!
//! Cells live in one flat row-major buffer: column `i` of row `j` sits at
//! `j * width + i`. Every cell holds `DEAD` or `ALIVE`; nothing else is ever
//! written. The buffer is sized once in [`Grid::new`] and never reallocated.

use std::fmt;

use crate::error::{LifeError, Result};

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// Allocate a zeroed `width * height` byte buffer, reporting failure instead
/// of aborting.
pub(crate) fn alloc_zeroed(width: usize, height: usize) -> Result<Vec<u8>> {
    let len = width
        .checked_mul(height)
        .ok_or(LifeError::Allocation { width, height })?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| LifeError::Allocation { width, height })?;
    buf.resize(len, 0);
    Ok(buf)
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Allocate a `width` x `height` grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let cells = alloc_zeroed(width, height)?;
        log::debug!("allocated {width}x{height} grid");
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns (`d1`).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (`d2`).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.width && j < self.height,
            "cell ({i},{j}) outside {}x{} grid",
            self.width,
            self.height
        );
        j * self.width + i
    }

    /// Raw state of cell `(i, j)`: `DEAD` or `ALIVE`.
    ///
    /// # Panics
    /// If `(i, j)` is outside the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.cells[self.index(i, j)]
    }

    #[inline]
    pub fn is_alive(&self, i: usize, j: usize) -> bool {
        self.get(i, j) == ALIVE
    }

    /// # Panics
    /// If `(i, j)` is outside the grid.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, alive: bool) {
        let idx = self.index(i, j);
        self.cells[idx] = if alive { ALIVE } else { DEAD };
    }

    /// Row-major view of every cell, for renderers.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    pub fn population(&self) -> u64 {
        self.cells.iter().map(|&c| c as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == DEAD)
    }

    /// Visit every live cell as `(i, j)`, row by row.
    pub fn for_each_live<F: FnMut(usize, usize)>(&self, mut f: F) {
        for (idx, &cell) in self.cells.iter().enumerate() {
            if cell == ALIVE {
                f(idx % self.width, idx / self.width);
            }
        }
    }

    /// Kill every cell, keeping dimensions and storage.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// Free the cell storage now rather than at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("population", &self.population())
            .finish()
    }
}

/// One text line per row, `#` for live cells and `.` for dead ones.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks_exact(self.width) {
            for &cell in row {
                f.write_str(if cell == ALIVE { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
