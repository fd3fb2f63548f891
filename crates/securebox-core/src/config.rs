use crate::Dimensions;
use serde::{Deserialize, Serialize};

/// Default upper bound on random toggles applied when a box is shuffled.
pub const DEFAULT_MAX_SHUFFLE_TOGGLES: u64 = 1000;

/// Configuration for constructing a [`SecureBox`](crate::SecureBox)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxConfig {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// Shuffle seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// The shuffle draws `rng % max_shuffle_toggles` random toggles (0 disables shuffling)
    pub max_shuffle_toggles: u64,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 4,
            seed: None,
            max_shuffle_toggles: DEFAULT_MAX_SHUFFLE_TOGGLES,
        }
    }
}

impl BoxConfig {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Fix the shuffle seed for reproducible boxes
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_shuffle_toggles(mut self, max: u64) -> Self {
        self.max_shuffle_toggles = max;
        self
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.columns)
    }
}
