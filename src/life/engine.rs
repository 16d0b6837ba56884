//! Full-grid generation stepping.

use super::grid::{Grid, alloc_zeroed};
use super::rules::RuleTable;
use super::topology::Topology;
use crate::error::Result;

/// Per-cell live-neighbor counts for one generation. Scratch only: fully
/// overwritten on every step.
pub struct NeighborCounts {
    counts: Vec<u8>,
    width: usize,
    height: usize,
}

impl NeighborCounts {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            counts: alloc_zeroed(width, height)?,
            width,
            height,
        })
    }

    /// Recount every cell of `grid` under `topology`. Reads only `grid`.
    pub fn recount(&mut self, grid: &Grid, topology: Topology) {
        debug_assert_eq!((grid.width(), grid.height()), (self.width, self.height));
        for j in 0..self.height {
            for i in 0..self.width {
                self.counts[j * self.width + i] = topology.count_neighbors(grid, i, j);
            }
        }
    }

    /// # Panics
    /// If `(i, j)` is outside the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u8 {
        assert!(i < self.width && j < self.height);
        self.counts[j * self.width + i]
    }

    #[inline]
    fn as_slice(&self) -> &[u8] {
        &self.counts
    }
}

/// Advance `grid` one generation: count every cell from the current
/// snapshot into `counts`, then apply B3/S23 in place.
pub fn step(grid: &mut Grid, counts: &mut NeighborCounts, topology: Topology, rules: &RuleTable) {
    counts.recount(grid, topology);
    for (cell, &n) in grid.cells_mut().iter_mut().zip(counts.as_slice()) {
        *cell = rules.lookup(*cell, n);
    }
}

/// A seeded grid plus everything needed to step it.
pub struct Life {
    grid: Grid,
    counts: NeighborCounts,
    topology: Topology,
    rule_table: RuleTable,
    generation: u64,
}

impl Life {
    /// Take ownership of `grid` and prepare its scratch buffer.
    pub fn new(grid: Grid, topology: Topology) -> Result<Self> {
        let counts = NeighborCounts::new(grid.width(), grid.height())?;
        Ok(Self {
            grid,
            counts,
            topology,
            rule_table: RuleTable::new(),
            generation: 0,
        })
    }

    /// An empty `width` x `height` world.
    pub fn with_size(width: usize, height: usize, topology: Topology) -> Result<Self> {
        Self::new(Grid::new(width, height)?, topology)
    }

    pub fn step(&mut self) {
        step(&mut self.grid, &mut self.counts, self.topology, &self.rule_table);
        self.generation += 1;
        log::trace!(
            "generation {}: population {}",
            self.generation,
            self.grid.population()
        );
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Read-only view for renderers.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for seeding between steps.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Neighbor counts from the most recent step.
    #[inline]
    pub fn neighbor_counts(&self) -> &NeighborCounts {
        &self.counts
    }

    pub fn set_cell(&mut self, i: usize, j: usize, alive: bool) {
        self.grid.set(i, j, alive);
    }

    pub fn get_cell(&self, i: usize, j: usize) -> bool {
        self.grid.is_alive(i, j)
    }

    pub fn population(&self) -> u64 {
        self.grid.population()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn for_each_live<F: FnMut(usize, usize)>(&self, f: F) {
        self.grid.for_each_live(f);
    }

    /// Free the grid and its scratch buffer.
    pub fn release(self) {
        log::debug!(
            "releasing {}x{} grid after {} generations",
            self.grid.width(),
            self.grid.height(),
            self.generation
        );
        self.grid.release();
    }
}
