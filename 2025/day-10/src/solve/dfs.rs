use tracing::{debug, trace, warn};

use super::{Order, Solver};
use crate::error::{Result, SolveError};
use crate::solution::Solution;
use crate::vector::Vector;

impl Solver<'_> {
    /// Searches for presses that arrive exactly at `destination`, starting from the origin.
    ///
    /// `destination` need not be the scenario target; bisection uses this on
    /// intermediate vectors. This is greedy-first, not a shortest-path search: the
    /// ranking only makes a cheap solution likely.
    #[tracing::instrument(level = "debug", skip_all, fields(%destination))]
    pub fn dfs(&self, destination: &Vector, solution: &mut Solution) -> Result<()> {
        self.ensure_dimensions(destination.dimensions())?;
        self.ensure_button_count(solution)?;

        let mut position = Vector::zeros(self.scenario.dimensions())?;
        self.dfs_from(&mut position, destination, 0, solution)
    }

    /// Press one more button, recurse, and undo the press if the subtree is a dead end.
    ///
    /// `position` and `solution` are always restored before returning
    /// [`SolveError::NoSolution`].
    fn dfs_from(
        &self,
        position: &mut Vector,
        destination: &Vector,
        depth: usize,
        solution: &mut Solution,
    ) -> Result<()> {
        if *position == *destination {
            return Ok(());
        }

        let order = Order::rank(self.scenario, position, destination)?;
        for &id in order.ids() {
            let button = self.scenario.button(id)?;
            solution.press(id)?;
            position.add(button)?;

            let outcome = if *position == *destination {
                Ok(())
            } else if depth >= self.max_depth {
                warn!(max_depth = self.max_depth, "maximum depth reached, stopping recursion");
                Err(SolveError::NoSolution)
            } else {
                self.dfs_from(position, destination, depth + 1, solution)
            };

            match outcome {
                Err(SolveError::NoSolution) => {
                    trace!(depth, id, "backtracking");
                    solution.unpress(id)?;
                    position.subtract(button)?;
                }
                other => return other,
            }
        }

        debug!(depth, candidates = order.len(), "dead end");
        Err(SolveError::NoSolution)
    }
}
