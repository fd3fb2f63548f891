//! Gauss-Jordan elimination over GF(2).
//!
//! Solves `A·x = b` for a square `A`. The augmented matrix `[A | b]` is
//! reduced column by column: the first row at or below the pivot row with a
//! 1 in the column becomes the pivot, and its row is XORed into every other
//! row holding a 1 there (above and below, right-hand side included). Columns
//! without a pivot are free variables and are left at 0, so the result is
//! one particular solution, not the lightest one.

use crate::{BitMatrix, BitVec, Result, UnlockError};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A particular solution of `A·x = b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gf2Solution {
    /// Solution bits, `x[i] = 1` meaning "toggle cell i once"
    #[serde(with = "bits_as_string")]
    pub x: BitVec,
    /// Rank of `A`
    pub rank: usize,
}

impl Gf2Solution {
    /// Unknowns not fixed by a pivot.
    pub fn free_variables(&self) -> usize {
        self.x.len() - self.rank
    }
}

/// Solve `A·x = b` mod 2.
///
/// Returns [`UnlockError::Unsolvable`] when the system is inconsistent and
/// [`UnlockError::DimensionMismatch`] when `A` is not square or `b` does not
/// fit it.
pub fn solve(a: &BitMatrix, b: &BitVec) -> Result<Gf2Solution> {
    let n = a.rows();
    if a.cols() != n {
        return Err(UnlockError::DimensionMismatch {
            expected: n,
            found: a.cols(),
        });
    }
    if b.len() != n {
        return Err(UnlockError::DimensionMismatch {
            expected: n,
            found: b.len(),
        });
    }

    let mut aug = augment(a, b);
    let rhs = n;
    let mut pivot_cols = Vec::with_capacity(n);
    let mut pivot_row = 0;

    for col in 0..n {
        if pivot_row == n {
            break;
        }
        let Some(found) = (pivot_row..n).find(|&r| aug.get(r, col)) else {
            trace!(col, "no pivot, free variable");
            continue;
        };
        aug.swap_rows(pivot_row, found);
        for other in 0..n {
            if other != pivot_row && aug.get(other, col) {
                aug.xor_row_into(pivot_row, other);
            }
        }
        pivot_cols.push(col);
        pivot_row += 1;
    }

    let rank = pivot_row;
    if let Some(row) = (rank..n).find(|&r| aug.get(r, rhs)) {
        return Err(UnlockError::Unsolvable { rank, row });
    }

    let mut x = BitVec::zeros(n);
    for (row, &pivot) in pivot_cols.iter().enumerate().rev() {
        let bit = aug
            .row(row)
            .ones()
            .filter(|&j| j > pivot && j < rhs)
            .fold(aug.get(row, rhs), |acc, j| acc ^ x.get(j));
        x.set(pivot, bit);
    }

    Ok(Gf2Solution { x, rank })
}

/// `[A | b]`, allocated once per solve.
fn augment(a: &BitMatrix, b: &BitVec) -> BitMatrix {
    let n = a.rows();
    let mut aug = BitMatrix::zeros(n, n + 1);
    for row in 0..n {
        for col in a.row(row).ones() {
            aug.set(row, col, true);
        }
        aug.set(row, n, b.get(row));
    }
    aug
}

mod bits_as_string {
    use crate::BitVec;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bits: &BitVec, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(bits)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BitVec, D::Error> {
        let text = String::deserialize(d)?;
        text.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(de::Error::custom(format!("invalid bit {other:?}"))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(BitVec::from_bools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::influence_matrix;
    use crate::Dimensions;

    fn matrix(rows: &[&str]) -> BitMatrix {
        let mut m = BitMatrix::zeros(rows.len(), rows[0].len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                m.set(r, c, ch == '1');
            }
        }
        m
    }

    fn bits(text: &str) -> BitVec {
        BitVec::from_bools(text.chars().map(|c| c == '1'))
    }

    #[test]
    fn test_identity() {
        let a = matrix(&["100", "010", "001"]);
        let b = bits("101");
        let sol = solve(&a, &b).unwrap();
        assert_eq!(sol.x, b);
        assert_eq!(sol.rank, 3);
        assert_eq!(sol.free_variables(), 0);
    }

    #[test]
    fn test_requires_row_swap() {
        // Column 0 has its only 1 in the last row.
        let a = matrix(&["010", "001", "111"]);
        let b = bits("110");
        let sol = solve(&a, &b).unwrap();
        assert_eq!(a.mul_vec(&sol.x), b);
        assert_eq!(sol.x.to_string(), "011");
    }

    #[test]
    fn test_elimination_updates_right_hand_side() {
        let a = matrix(&["11", "01"]);
        let b = bits("01");
        let sol = solve(&a, &b).unwrap();
        assert_eq!(sol.x.to_string(), "11");
        assert_eq!(a.mul_vec(&sol.x), b);
    }

    #[test]
    fn test_inconsistent_rank_deficient_system() {
        let a = matrix(&["1111", "1111", "0000", "0000"]);
        let b = bits("1000");
        match solve(&a, &b) {
            Err(UnlockError::Unsolvable { rank, row }) => {
                assert_eq!(rank, 1);
                assert!(row >= rank);
            }
            other => panic!("expected Unsolvable, got {other:?}"),
        }
    }

    #[test]
    fn test_consistent_rank_deficient_system_sets_free_variables_to_zero() {
        let a = matrix(&["11", "11"]);
        let b = bits("11");
        let sol = solve(&a, &b).unwrap();
        assert_eq!(sol.rank, 1);
        assert_eq!(sol.free_variables(), 1);
        assert_eq!(sol.x.to_string(), "10");
    }

    #[test]
    fn test_two_by_two_box() {
        let a = influence_matrix(Dimensions::new(2, 2));
        let b = bits("1001");
        let sol = solve(&a, &b).unwrap();
        assert_eq!(a.mul_vec(&sol.x), b);
        assert_eq!(sol.x.count_ones() % 2, 0);
        assert_eq!(sol.x.to_string(), "1001");
    }

    #[test]
    fn test_one_by_two_box_cannot_split_a_row() {
        // Every toggle flips the whole row.
        let a = influence_matrix(Dimensions::new(1, 2));
        assert!(matches!(
            solve(&a, &bits("10")),
            Err(UnlockError::Unsolvable { rank: 1, .. })
        ));
        assert!(solve(&a, &bits("11")).is_ok());
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = matrix(&["10", "01"]);
        assert_eq!(
            solve(&a, &bits("101")),
            Err(UnlockError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
        let wide = matrix(&["101", "011"]);
        assert!(matches!(
            solve(&wide, &bits("11")),
            Err(UnlockError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_system() {
        let sol = solve(&BitMatrix::zeros(0, 0), &BitVec::zeros(0)).unwrap();
        assert!(sol.x.is_empty());
        assert_eq!(sol.rank, 0);
    }

    #[test]
    fn test_solution_serializes_as_bit_string() {
        let sol = Gf2Solution {
            x: bits("0110"),
            rank: 3,
        };
        let json = serde_json::to_string(&sol).unwrap();
        assert_eq!(json, r#"{"x":"0110","rank":3}"#);
        let back: Gf2Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sol);
    }
}
