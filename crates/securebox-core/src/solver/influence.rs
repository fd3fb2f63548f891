//! Influence matrix: row `i` lists the cells flipped by toggling cell `i`.

use crate::{BitMatrix, Dimensions};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Build the `(rows*columns)²` influence matrix.
///
/// `A[i][j] = 1` iff cells `i` and `j` share a row or a column (so the
/// diagonal is set). Depends only on `dims`; the result is symmetric.
pub fn influence_matrix(dims: Dimensions) -> BitMatrix {
    let n = dims.cell_count();
    let mut a = BitMatrix::zeros(n, n);
    for toggle in 0..n {
        let t = dims.position_of(toggle);
        for cell in 0..n {
            let c = dims.position_of(cell);
            if t.row == c.row || t.col == c.col {
                a.set(toggle, cell, true);
            }
        }
    }
    a
}

/// Memoized influence matrices, one per grid size.
#[derive(Debug, Default)]
pub struct InfluenceCache {
    matrices: HashMap<Dimensions, Arc<BitMatrix>>,
}

impl InfluenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matrix for `dims`, built on first request.
    pub fn get(&mut self, dims: Dimensions) -> Arc<BitMatrix> {
        if let Some(a) = self.matrices.get(&dims) {
            trace!(%dims, "influence matrix cache hit");
            return Arc::clone(a);
        }
        debug!(%dims, cells = dims.cell_count(), "building influence matrix");
        let a = Arc::new(influence_matrix(dims));
        self.matrices.insert(dims, Arc::clone(&a));
        a
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn clear(&mut self) {
        self.matrices.clear();
    }
}
