use tracing::{debug, info};

use super::Solver;
use crate::combination::Combinations;
use crate::error::{Result, SolveError};
use crate::solution::Solution;
use crate::vector::{Button, Vector};

impl Solver<'_> {
    /// Finds the smallest set of distinct buttons whose summed effect has the parity
    /// of `mask` in every dimension.
    ///
    /// Pressing a button twice never changes parity, so each button is pressed at
    /// most once and this is a subset search over sizes `1..button_count`. The first
    /// matching subset wins: its presses are added to `solution` and the vector they
    /// reach is returned. An all-zero mask is matched by pressing nothing.
    pub fn solve_mask(&self, mask: &Button, solution: &mut Solution) -> Result<Vector> {
        self.ensure_dimensions(mask.dimensions())?;
        self.ensure_button_count(solution)?;

        let mut scratch = Vector::zeros(self.scenario.dimensions())?;
        if mask.is_zero() {
            return Ok(scratch);
        }

        let button_count = self.scenario.button_count();
        for size in 1..button_count {
            let mut combinations = Combinations::new(button_count, size)?;
            while let Some(combination) = combinations.advance() {
                if !self.combination_matches(mask, combination, &mut scratch)? {
                    continue;
                }

                for &id in combination {
                    solution.press(id)?;
                }
                info!(%mask, ?combination, reached = %scratch, "found parity match");
                return Ok(scratch);
            }
            debug!(%mask, size, "no parity match");
        }

        Err(SolveError::NoSolution)
    }

    fn combination_matches(
        &self,
        mask: &Button,
        combination: &[usize],
        scratch: &mut Vector,
    ) -> Result<bool> {
        scratch.reset();
        for &id in combination {
            scratch.add(self.scenario.button(id)?)?;
        }
        scratch.matches_mask(mask)
    }
}
