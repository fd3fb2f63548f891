//! Turns a solution vector into toggle calls and checks the result.

use crate::{BitVec, Dimensions, Lockable, Position, Result, UnlockError};
use serde::{Deserialize, Serialize};

/// The cells to toggle, each exactly once. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TogglePlan {
    toggles: Vec<Position>,
}

impl TogglePlan {
    /// Decode every set bit `i` of `x` into `(i / columns, i % columns)`.
    pub fn from_solution(x: &BitVec, dims: Dimensions) -> Self {
        debug_assert_eq!(x.len(), dims.cell_count());
        Self {
            toggles: x.ones().map(|i| dims.position_of(i)).collect(),
        }
    }

    pub fn toggles(&self) -> &[Position] {
        &self.toggles
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    /// Issue every planned toggle once.
    pub fn apply<G: Lockable + ?Sized>(&self, grid: &mut G) {
        for &pos in &self.toggles {
            grid.toggle(pos);
        }
    }

    pub fn into_toggles(self) -> Vec<Position> {
        self.toggles
    }
}

/// Ask the grid itself whether it opened.
pub fn verify<G: Lockable + ?Sized>(grid: &G, plan: &TogglePlan) -> Result<()> {
    if grid.is_locked() {
        return Err(UnlockError::VerificationFailed {
            toggles: plan.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecureBox;

    #[test]
    fn test_decode_positions() {
        let dims = Dimensions::new(2, 3);
        let x = BitVec::from_bools([false, true, false, false, false, true]);
        let plan = TogglePlan::from_solution(&x, dims);
        assert_eq!(plan.toggles(), &[Position::new(0, 1), Position::new(1, 2)]);
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_empty_solution_plans_nothing() {
        let plan = TogglePlan::from_solution(&BitVec::zeros(4), Dimensions::new(2, 2));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_apply_then_verify() {
        // (0,0) then (1,1) clears the two opposite corners of a 2x2 box.
        let mut b = SecureBox::from_state(vec![vec![true, false], vec![false, true]]).unwrap();
        let plan = TogglePlan::from_solution(
            &BitVec::from_bools([true, false, false, true]),
            Dimensions::new(2, 2),
        );
        assert_eq!(verify(&b, &plan), Err(UnlockError::VerificationFailed { toggles: 2 }));
        plan.apply(&mut b);
        assert_eq!(verify(&b, &plan), Ok(()));
    }
}
