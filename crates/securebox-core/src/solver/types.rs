use crate::{Dimensions, Position};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary of a successful unlock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockReport {
    /// Grid size
    pub dimensions: Dimensions,
    /// Rank of the influence matrix
    pub rank: usize,
    /// Unknowns left at 0 by elimination
    pub free_variables: usize,
    /// Cells that were toggled, once each
    pub toggles: Vec<Position>,
    /// Time from sampling to verification
    pub elapsed: Duration,
}

impl UnlockReport {
    pub fn toggle_count(&self) -> usize {
        self.toggles.len()
    }
}
