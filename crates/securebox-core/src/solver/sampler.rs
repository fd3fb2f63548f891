//! Flattens a grid snapshot into the right-hand side `b` of `A·x = b`.

use crate::{BitVec, Dimensions, Result, UnlockError};

/// `b[row * columns + col] = snapshot[row][col]`.
///
/// A snapshot whose shape disagrees with `dims` is a [`UnlockError::DimensionMismatch`].
pub fn sample(snapshot: &[Vec<bool>], dims: Dimensions) -> Result<BitVec> {
    if snapshot.len() != dims.rows {
        return Err(UnlockError::DimensionMismatch {
            expected: dims.rows,
            found: snapshot.len(),
        });
    }
    if let Some(row) = snapshot.iter().find(|row| row.len() != dims.columns) {
        return Err(UnlockError::DimensionMismatch {
            expected: dims.columns,
            found: row.len(),
        });
    }
    Ok(BitVec::from_bools(snapshot.iter().flatten().copied()))
}
