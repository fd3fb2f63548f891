use thiserror::Error;

/// Everything that can keep a box locked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnlockError {
    /// The augmented system `[A | b]` is inconsistent: no toggle set clears the grid.
    #[error("no toggle combination clears this grid (rank {rank}, contradiction in row {row})")]
    Unsolvable { rank: usize, row: usize },

    /// Every planned toggle was applied but the box still reports set cells.
    /// Points at a mismatch between the influence model and the real toggle.
    #[error("box still locked after applying {toggles} planned toggles")]
    VerificationFailed { toggles: usize },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("ragged grid state: row {row} has {found} cells, expected {expected}")]
    RaggedState { row: usize, expected: usize, found: usize },

    #[error("grid must have at least one row and one column")]
    EmptyGrid,
}

impl UnlockError {
    /// True when the failure points at a modelling bug rather than an
    /// instance that genuinely has no solution.
    pub fn is_model_mismatch(&self) -> bool {
        matches!(self, UnlockError::VerificationFailed { .. })
    }
}

pub type Result<T> = std::result::Result<T, UnlockError>;
