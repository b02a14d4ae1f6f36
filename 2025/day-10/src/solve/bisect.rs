use tracing::{debug, info, warn};

use super::Solver;
use crate::error::{Result, SolveError};
use crate::solution::Solution;
use crate::vector::Vector;
use crate::BALANCE_FACTOR;

/// Outcome of one bisection level that did not hit a hard error.
#[derive(Debug)]
enum Bisection {
    /// Presses reaching this level's destination exactly.
    Solved(Solution),
    /// Bisection cannot continue; solve the unbisected destination directly instead.
    FallBack,
}

impl Solver<'_> {
    /// Solves `destination` by repeatedly stripping its odd remainder and halving.
    ///
    /// At every level the odd coordinates are resolved with [`Solver::solve_mask`],
    /// the even remainder is halved and solved recursively, and the halved solution is
    /// doubled back. A level that cannot be bisected is solved with [`Solver::dfs`] on
    /// its full destination instead; a [`SolveError::NoSolution`] from there propagates.
    #[tracing::instrument(skip_all, fields(%destination))]
    pub fn bisect(&self, destination: &Vector, solution: &mut Solution) -> Result<()> {
        self.ensure_dimensions(destination.dimensions())?;
        self.ensure_button_count(solution)?;

        let found = self.bisect_at(destination, 0)?;
        solution.combine(&found)
    }

    fn bisect_at(&self, destination: &Vector, depth: usize) -> Result<Solution> {
        if destination.is_zero() {
            debug!(depth, "destination is empty");
            return Solution::for_scenario(self.scenario);
        }

        match self.halve(destination, depth)? {
            Bisection::Solved(solution) => Ok(solution),
            Bisection::FallBack => {
                warn!(depth, %destination, "falling back to DFS");
                let mut solution = Solution::for_scenario(self.scenario)?;
                self.dfs(destination, &mut solution)?;
                Ok(solution)
            }
        }
    }

    fn halve(&self, destination: &Vector, depth: usize) -> Result<Bisection> {
        let mut remainder = destination.clone();
        let mut solution = Solution::for_scenario(self.scenario)?;

        let skimmed = destination.skim_to_even();
        if !skimmed.is_zero() {
            let mut parity = Solution::for_scenario(self.scenario)?;
            let reached = match self.solve_mask(&skimmed, &mut parity) {
                Ok(reached) => reached,
                Err(SolveError::NoSolution) => {
                    debug!(depth, %skimmed, "no parity match for skimmed remainder");
                    return Ok(Bisection::FallBack);
                }
                Err(err) => return Err(err),
            };

            match remainder.subtract_vector(&reached) {
                Ok(()) => solution.combine(&parity)?,
                Err(SolveError::Underflow { index, .. }) => {
                    debug!(depth, %reached, index, "parity presses overshoot the destination");
                    return Ok(Bisection::FallBack);
                }
                Err(err) => return Err(err),
            }
        }

        if remainder.is_zero() {
            return Ok(Bisection::Solved(solution));
        }

        // Stripping a parity match leaves every coordinate even, so this only guards
        // against a mask solver that breaks that contract.
        match remainder.divide_by_scalar(BALANCE_FACTOR) {
            Ok(()) => {}
            Err(SolveError::Indivisible { index, value, .. }) => {
                debug!(depth, index, value, "remainder is not divisible");
                return Ok(Bisection::FallBack);
            }
            Err(err) => return Err(err),
        }

        let mut halved = self.bisect_at(&remainder, depth + 1)?;
        halved.scale(BALANCE_FACTOR)?;
        solution.combine(&halved)?;
        info!(depth, %destination, %solution, "solved bisected destination");

        Ok(Bisection::Solved(solution))
    }
}
