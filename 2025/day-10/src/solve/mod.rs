//! Press-count solvers.
//!
//! Three strategies share one [`Solver`]:
//! - [`Solver::solve_mask`] finds the smallest set of distinct buttons matching a parity mask.
//! - [`Solver::dfs`] greedily walks towards a destination, backtracking on dead ends.
//! - [`Solver::bisect`] strips the odd remainder, halves what is left and recurses.
//!
//! Every strategy adds its presses to a caller-supplied [`Solution`].

mod bisect;
mod dfs;
mod mask;

use crate::error::{Result, SolveError};
use crate::scenario::Scenario;
use crate::solution::Solution;
use crate::vector::{Button, Distance, Vector};
use crate::{MAX_BUTTONS, MAX_PRESSES};

/// Button ids ranked by how close a single press brings the current position to the
/// destination. Buttons that would overshoot are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    ids: heapless::Vec<usize, MAX_BUTTONS>,
}

impl Order {
    pub fn rank(scenario: &Scenario, current: &Vector, destination: &Vector) -> Result<Self> {
        let capacity_exceeded = || SolveError::InsufficientCapacity {
            capacity: MAX_BUTTONS,
            requested: scenario.button_count(),
        };

        let mut ranked: heapless::Vec<(Distance, usize), MAX_BUTTONS> = heapless::Vec::new();
        for (id, button) in scenario.buttons().iter().enumerate() {
            match current.squared_distance_with_button(button, destination) {
                Ok(distance) => {
                    tracing::trace!(id, distance, "candidate");
                    ranked.push((distance, id)).map_err(|_| capacity_exceeded())?;
                }
                Err(SolveError::DistanceUnderflow { index, .. }) => {
                    tracing::trace!(id, index, "button would overshoot, ignoring");
                }
                Err(err) => return Err(err),
            }
        }

        // Stable, so ties keep button order.
        ranked.sort_by_key(|&(distance, _)| distance);

        let mut ids = heapless::Vec::new();
        for (_, id) in ranked {
            ids.push(id).map_err(|_| capacity_exceeded())?;
        }
        Ok(Self { ids })
    }

    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Borrows a scenario and runs the solving strategies against it.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'s> {
    scenario: &'s Scenario,
    max_depth: usize,
}

impl<'s> Solver<'s> {
    pub fn new(scenario: &'s Scenario) -> Self {
        Self {
            scenario,
            max_depth: MAX_PRESSES,
        }
    }

    /// Overrides the DFS depth ceiling.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn ensure_dimensions(&self, found: usize) -> Result<()> {
        if found != self.scenario.dimensions() {
            return Err(SolveError::MismatchedDimensions {
                expected: self.scenario.dimensions(),
                found,
            });
        }
        Ok(())
    }

    fn ensure_button_count(&self, solution: &Solution) -> Result<()> {
        if solution.button_count() != self.scenario.button_count() {
            return Err(SolveError::MismatchedButtonCount {
                expected: self.scenario.button_count(),
                found: solution.button_count(),
            });
        }
        Ok(())
    }
}

/// Adds to `solution` the smallest set of distinct buttons whose presses match the
/// parity of `mask`, returning the vector those presses reach.
pub fn solve_mask(
    scenario: &Scenario,
    mask: &Button,
    solution: &mut Solution,
) -> Result<Vector> {
    Solver::new(scenario).solve_mask(mask, solution)
}

/// Adds to `solution` presses reaching `destination` from the origin, by heuristic DFS.
pub fn dfs_solve(scenario: &Scenario, destination: &Vector, solution: &mut Solution) -> Result<()> {
    Solver::new(scenario).dfs(destination, solution)
}

/// Adds to `solution` presses reaching `destination`, by recursive bisection.
pub fn bisection_solve(
    scenario: &Scenario,
    destination: &Vector,
    solution: &mut Solution,
) -> Result<()> {
    Solver::new(scenario).bisect(destination, solution)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use crate::parser::parse_scenario;

    pub(crate) const EXAMPLE_1: &str = "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}";
    pub(crate) const EXAMPLE_2: &str =
        "[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}";
    pub(crate) const EXAMPLE_3: &str =
        "[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}";

    pub(crate) fn scenario(line: &str) -> Scenario {
        parse_scenario(line).unwrap()
    }

    pub(crate) fn vector(values: &[u16]) -> Vector {
        Vector::from_slice(values).unwrap()
    }

    use rstest::rstest;

    #[rstest]
    #[case(&[0, 0, 0, 0], &[3, 5, 4, 7], &[1, 3, 5, 0, 4, 2])]
    #[case(&[0, 0, 0, 0], &[0, 0, 1, 1], &[3, 0, 2])]
    #[case(&[3, 3, 2, 4], &[3, 5, 4, 7], &[1, 3, 0, 2])]
    #[case(&[0, 0, 0, 0], &[0, 1, 0, 0], &[])]
    fn rank_buttons_by_distance(
        #[case] current: &[u16],
        #[case] destination: &[u16],
        #[case] expected: &[usize],
    ) {
        let scenario = scenario(EXAMPLE_1);
        let order = Order::rank(&scenario, &vector(current), &vector(destination)).unwrap();
        assert_eq!(order.ids(), expected);
        assert_eq!(order.len(), expected.len());
    }

    #[test]
    fn rank_fills_every_button_slot() {
        let scenario = scenario(
            "[....] (0) (1) (2) (3) (0,1) (1,2) (2,3) (0,3) (0,2) (1,3) (0,1,2) (1,2,3) {9,9,9,9}",
        );
        assert_eq!(scenario.button_count(), MAX_BUTTONS);

        let order = Order::rank(&scenario, &vector(&[0, 0, 0, 0]), scenario.target()).unwrap();

        assert_eq!(order.len(), MAX_BUTTONS);
        assert_eq!(order.ids(), &[10, 11, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3]);
    }

    #[test]
    fn rank_rejects_mismatched_dimensions() {
        let scenario = scenario(EXAMPLE_1);
        let result = Order::rank(&scenario, &vector(&[0, 0, 0]), &vector(&[3, 5, 4]));
        assert_eq!(
            result,
            Err(SolveError::MismatchedDimensions {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn solvers_reject_mismatched_inputs() {
        let scenario = scenario(EXAMPLE_1);
        let mut solution = Solution::new(6).unwrap();
        assert!(matches!(
            dfs_solve(&scenario, &vector(&[1, 1, 1]), &mut solution),
            Err(SolveError::MismatchedDimensions { .. })
        ));

        let mut short = Solution::new(5).unwrap();
        assert!(matches!(
            bisection_solve(&scenario, scenario.target(), &mut short),
            Err(SolveError::MismatchedButtonCount { .. })
        ));
    }
}
