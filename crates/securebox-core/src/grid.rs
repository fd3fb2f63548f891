//! The locked grid and the narrow interface the unlocker is allowed to use.

use crate::{BoxConfig, Result, UnlockError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// A cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid size. Owns the row-major cell index convention `i = row * columns + col`
/// shared by the sampler, the influence matrix and the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.columns
    }

    #[inline]
    pub fn index_of(&self, pos: Position) -> usize {
        pos.row * self.columns + pos.col
    }

    #[inline]
    pub fn position_of(&self, idx: usize) -> Position {
        Position::new(idx / self.columns, idx % self.columns)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let columns = self.columns;
        (0..self.cell_count()).map(move |i| Position::new(i / columns, i % columns))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// The only operations the unlocker may perform on a grid.
///
/// `toggle` must flip the target cell and every other cell sharing its row
/// or column, and any set of toggles must reach the same state in any order.
pub trait Lockable {
    fn dimensions(&self) -> Dimensions;

    fn toggle(&mut self, pos: Position);

    /// True iff at least one cell is set.
    fn is_locked(&self) -> bool;

    /// Row-major copy of every cell.
    fn state(&self) -> Vec<Vec<bool>>;
}

/// A grid of locked (`true`) and unlocked (`false`) cells, scrambled on creation.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureBox {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl SecureBox {
    /// Create a box and shuffle it with random toggles.
    pub fn new(config: &BoxConfig) -> Result<Self> {
        let dims = config.dimensions();
        if dims.cell_count() == 0 {
            return Err(UnlockError::EmptyGrid);
        }
        let mut secure_box = Self {
            dims,
            cells: vec![false; dims.cell_count()],
        };
        let mut rng = match config.seed {
            Some(seed) => ShuffleRng::seeded(seed),
            None => ShuffleRng::from_os(),
        };
        secure_box.shuffle(&mut rng, config.max_shuffle_toggles);
        Ok(secure_box)
    }

    /// Build a box holding an explicit configuration, reachable by toggles or not.
    pub fn from_state(state: Vec<Vec<bool>>) -> Result<Self> {
        let rows = state.len();
        let columns = state.first().map_or(0, Vec::len);
        if rows == 0 || columns == 0 {
            return Err(UnlockError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(rows * columns);
        for (row, line) in state.into_iter().enumerate() {
            if line.len() != columns {
                return Err(UnlockError::RaggedState {
                    row,
                    expected: columns,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }
        Ok(Self {
            dims: Dimensions::new(rows, columns),
            cells,
        })
    }

    /// Number of set cells
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn shuffle(&mut self, rng: &mut ShuffleRng, max_toggles: u64) {
        if max_toggles == 0 {
            return;
        }
        let toggles = rng.next_u64() % max_toggles;
        for _ in 0..toggles {
            let row = rng.below(self.dims.rows);
            let col = rng.below(self.dims.columns);
            self.toggle(Position::new(row, col));
        }
        debug!(
            dims = %self.dims,
            toggles,
            locked = self.locked_count(),
            "shuffled box"
        );
    }

    fn flip(&mut self, row: usize, col: usize) {
        let idx = self.dims.index_of(Position::new(row, col));
        self.cells[idx] = !self.cells[idx];
    }
}

impl Lockable for SecureBox {
    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// # Panics
    /// Panics if `pos` is outside the box.
    fn toggle(&mut self, pos: Position) {
        assert!(
            self.dims.contains(pos),
            "toggle {pos} outside {} box",
            self.dims
        );
        for col in 0..self.dims.columns {
            self.flip(pos.row, col);
        }
        for row in (0..self.dims.rows).filter(|&r| r != pos.row) {
            self.flip(row, pos.col);
        }
    }

    fn is_locked(&self) -> bool {
        self.cells.iter().any(|&c| c)
    }

    fn state(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.dims.columns)
            .map(<[bool]>::to_vec)
            .collect()
    }
}

impl fmt::Display for SecureBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dims.columns) {
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SecureBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureBox({})\n{}", self.dims, self)
    }
}

/// PCG-style stream driving the shuffle. Same seed, same box.
struct ShuffleRng {
    state: u64,
}

impl ShuffleRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Seed from the OS, or from a process-wide counter if that is unavailable.
    fn from_os() -> Self {
        let mut bytes = [0u8; 8];
        let seed = match getrandom::getrandom(&mut bytes) {
            Ok(()) => u64::from_le_bytes(bytes),
            Err(err) => {
                static FALLBACK: AtomicU64 = AtomicU64::new(1);
                debug!(%err, "no OS entropy, using counter seed");
                FALLBACK.fetch_add(1, Ordering::Relaxed)
            }
        };
        Self::seeded(seed)
    }

    fn seeded(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let mixed = (((self.state >> 18) ^ self.state) >> 27) as u32;
        u64::from(mixed.rotate_right((self.state >> 59) as u32))
    }

    /// Uniform-ish draw in `0..bound`.
    fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}
