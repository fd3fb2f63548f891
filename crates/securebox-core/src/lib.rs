//! Unlocks a SecureBox: a grid of locked cells where toggling one cell flips
//! its whole row and column.
//!
//! Toggles commute and are self-inverse, so the puzzle is the linear system
//! `A·x = b` over GF(2), with `A` the influence matrix of the grid size and
//! `b` the observed cells. [`Unlocker`] solves it by Gaussian elimination and
//! applies the toggles named by `x`.

mod bits;
mod config;
mod error;
mod grid;
pub mod solver;


pub use bits::{BitMatrix, BitVec};
pub use config::{BoxConfig, DEFAULT_MAX_SHUFFLE_TOGGLES};
pub use error::{Result, UnlockError};
pub use grid::{Dimensions, Lockable, Position, SecureBox};
pub use solver::{
    influence_matrix, Gf2Solution, InfluenceCache, TogglePlan, UnlockReport, Unlocker,
};

/// Build a shuffled `rows`×`columns` box and try to open it.
///
/// Returns `true` if the box is still locked, `false` once it is open.
pub fn open_box(rows: usize, columns: usize) -> bool {
    open_box_with(&BoxConfig::new(rows, columns))
}

/// [`open_box`] with an explicit configuration.
pub fn open_box_with(config: &BoxConfig) -> bool {
    let mut secure_box = match SecureBox::new(config) {
        Ok(b) => b,
        Err(err) => {
            tracing::error!(%err, "could not build box");
            return true;
        }
    };
    solver::unlock_or_report(&mut Unlocker::new(), &mut secure_box)
}
