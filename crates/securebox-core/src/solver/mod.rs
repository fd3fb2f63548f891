//! Unlock pipeline.
//!
//! sample → influence matrix → GF(2) elimination → apply toggles → verify.
//! Solvability is decided before the first toggle, so an unsolvable grid is
//! left exactly as it was found.

mod gf2;
mod influence;
mod planner;
mod sampler;
mod types;

use crate::{Lockable, Result, UnlockError};
use std::time::Instant;
use tracing::{debug, error, info, warn};

pub use gf2::{solve, Gf2Solution};
pub use influence::{influence_matrix, InfluenceCache};
pub use planner::{verify, TogglePlan};
pub use sampler::sample;
pub use types::UnlockReport;

/// Runs the pipeline. Keeps influence matrices across solves of the same size.
#[derive(Debug, Default)]
pub struct Unlocker {
    cache: InfluenceCache,
}

impl Unlocker {
    /// Create a new unlocker with an empty matrix cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &InfluenceCache {
        &self.cache
    }

    /// Compute the toggles that clear `grid` without touching it.
    pub fn plan<G: Lockable + ?Sized>(&mut self, grid: &G) -> Result<(TogglePlan, Gf2Solution)> {
        let dims = grid.dimensions();
        let b = sample(&grid.state(), dims)?;
        debug!(%dims, locked = b.count_ones(), "sampled grid");

        let a = self.cache.get(dims);
        let solution = solve(&a, &b)?;
        debug!(
            rank = solution.rank,
            free = solution.free_variables(),
            "eliminated"
        );

        let plan = TogglePlan::from_solution(&solution.x, dims);
        Ok((plan, solution))
    }

    /// Clear `grid`, or explain why it is still locked.
    pub fn unlock<G: Lockable + ?Sized>(&mut self, grid: &mut G) -> Result<UnlockReport> {
        let started = Instant::now();
        let dims = grid.dimensions();

        let (plan, solution) = self.plan(&*grid)?;
        plan.apply(grid);
        debug!(toggles = plan.len(), "applied plan");
        verify(&*grid, &plan)?;

        let report = UnlockReport {
            dimensions: dims,
            rank: solution.rank,
            free_variables: solution.free_variables(),
            toggles: plan.into_toggles(),
            elapsed: started.elapsed(),
        };
        info!(
            %dims,
            toggles = report.toggle_count(),
            elapsed_us = report.elapsed.as_micros() as u64,
            "box opened"
        );
        Ok(report)
    }
}

/// Run the pipeline once and collapse the outcome to "still locked?".
pub fn unlock_or_report<G: Lockable + ?Sized>(unlocker: &mut Unlocker, grid: &mut G) -> bool {
    match unlocker.unlock(grid) {
        Ok(_) => false,
        Err(err @ UnlockError::VerificationFailed { .. }) => {
            error!(%err, "toggle model disagrees with the box");
            true
        }
        Err(err) => {
            warn!(%err, "box cannot be opened");
            true
        }
    }
}
