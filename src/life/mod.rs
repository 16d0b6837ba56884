//! Fixed-grid Life: storage, edge treatments, rule and stepping.

mod engine;
mod grid;
mod rules;
mod topology;

pub use engine::{Life, NeighborCounts, step};
pub use grid::{ALIVE, DEAD, Grid};
pub use rules::RuleTable;
pub use topology::{Direction, Topology};
