//! Rule table for B3/S23.

/// Number of distinct neighbor counts (0 through 8).
pub const NEIGHBOR_STATES: usize = 9;

/// Next-state lookup indexed by `state * NEIGHBOR_STATES + count`.
pub struct RuleTable {
    table: [u8; 2 * NEIGHBOR_STATES],
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTable {
    pub fn new() -> Self {
        let mut table = [0u8; 2 * NEIGHBOR_STATES];
        for state in 0u8..=1 {
            for count in 0u8..=8 {
                table[slot(state, count)] = output_for(state, count);
            }
        }
        Self { table }
    }

    /// Next state of a cell in `state` with `count` live neighbors.
    #[inline(always)]
    pub fn lookup(&self, state: u8, count: u8) -> u8 {
        self.table[slot(state, count)]
    }
}

#[inline(always)]
fn slot(state: u8, count: u8) -> usize {
    debug_assert!(state <= 1 && count <= 8);
    state as usize * NEIGHBOR_STATES + count as usize
}

fn output_for(state: u8, count: u8) -> u8 {
    let alive = state == 1;
    let next_alive = if alive {
        count == 2 || count == 3
    } else {
        count == 3
    };
    next_alive as u8
}
