//! Bit containers for linear algebra over GF(2).
//!
//! Addition is XOR and multiplication is AND, so a row operation is a
//! symmetric difference of two bitsets.

use fixedbitset::FixedBitSet;
use std::fmt;

/// A dense vector over GF(2) of fixed length.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitVec(FixedBitSet);

impl BitVec {
    /// Zero vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self(FixedBitSet::with_capacity(len))
    }

    /// Build from booleans, `true` becoming 1.
    pub fn from_bools<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        let bits: Vec<bool> = bits.into_iter().collect();
        let mut set = FixedBitSet::with_capacity(bits.len());
        for (i, &bit) in bits.iter().enumerate() {
            if bit {
                set.insert(i);
            }
        }
        Self(set)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.len() == 0
    }

    /// True if every bit is 0.
    pub fn is_zero(&self) -> bool {
        self.0.count_ones(..) == 0
    }

    /// # Panics
    /// Panics if `i >= len`.
    pub fn get(&self, i: usize) -> bool {
        assert!(i < self.len(), "bit index {i} out of range (len={})", self.len());
        self.0.contains(i)
    }

    /// # Panics
    /// Panics if `i >= len`.
    pub fn set(&mut self, i: usize, value: bool) {
        assert!(i < self.len(), "bit index {i} out of range (len={})", self.len());
        self.0.set(i, value);
    }

    /// # Panics
    /// Panics if `i >= len`.
    pub fn flip(&mut self, i: usize) {
        assert!(i < self.len(), "bit index {i} out of range (len={})", self.len());
        self.0.toggle(i);
    }

    /// Adds `other` into `self` (XOR).
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn xor_assign(&mut self, other: &Self) {
        assert_eq!(
            self.len(),
            other.len(),
            "xor_assign: length mismatch ({} vs {})",
            self.len(),
            other.len()
        );
        self.0.symmetric_difference_with(&other.0);
    }

    /// Inner product mod 2.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn dot(&self, other: &Self) -> bool {
        assert_eq!(
            self.len(),
            other.len(),
            "dot: length mismatch ({} vs {})",
            self.len(),
            other.len()
        );
        self.0.intersection(&other.0).count() % 2 == 1
    }

    /// Hamming weight.
    pub fn count_ones(&self) -> usize {
        self.0.count_ones(..)
    }

    /// Indices of set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.ones()
    }
}

impl fmt::Debug for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVec({}, [", self.len())?;
        for (n, i) in self.ones().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{i}")?;
        }
        write!(f, "])")
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len() {
            write!(f, "{}", if self.0.contains(i) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// A dense matrix over GF(2), one bitset per row.
#[derive(Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<BitVec>,
    cols: usize,
}

impl BitMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![BitVec::zeros(cols); rows],
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows.len() == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row].get(col)
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.rows[row].set(col, value);
    }

    pub fn row(&self, row: usize) -> &BitVec {
        &self.rows[row]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// `rows[dst] ^= rows[src]` without cloning the source row.
    ///
    /// # Panics
    /// Panics if `src == dst` or either index is out of range.
    pub fn xor_row_into(&mut self, src: usize, dst: usize) {
        assert_ne!(src, dst, "xor_row_into: source and destination are the same row");
        if src < dst {
            let (head, tail) = self.rows.split_at_mut(dst);
            tail[0].xor_assign(&head[src]);
        } else {
            let (head, tail) = self.rows.split_at_mut(src);
            head[dst].xor_assign(&tail[0]);
        }
    }

    /// `A·x` mod 2.
    ///
    /// # Panics
    /// Panics if `x.len() != cols`.
    pub fn mul_vec(&self, x: &BitVec) -> BitVec {
        BitVec::from_bools(self.rows.iter().map(|row| row.dot(x)))
    }

    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        (0..self.cols).all(|i| self.rows[i].ones().all(|j| self.get(j, i)))
    }
}

impl fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitMatrix({}x{})", self.rows.len(), self.cols)?;
        for row in &self.rows {
            writeln!(f, "  {row}")?;
        }
        Ok(())
    }
}
