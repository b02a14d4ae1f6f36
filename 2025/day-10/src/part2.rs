use indicatif::ParallelProgressIterator;
use miette::*;
use rayon::prelude::*;

use crate::parser;
use crate::scenario::Scenario;
use crate::solution::Solution;
use crate::solve::bisection_solve;

/// Presses needed to bring every joltage counter of a machine to its target.
///
/// The solution is replayed against the target before it is counted.
#[tracing::instrument(level = "debug", skip_all, fields(target = %scenario.target()))]
fn joltage_presses(scenario: &Scenario) -> Result<u64> {
    let mut solution = Solution::for_scenario(scenario)?;
    bisection_solve(scenario, scenario.target(), &mut solution)?;
    solution.verify(scenario, scenario.target())?;

    tracing::info!(%solution, total = solution.total_presses(), "machine solved");
    Ok(solution.total_presses())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let scenarios = parser::parse(input)?;

    let presses = scenarios
        .par_iter()
        .progress_count(scenarios.len() as u64)
        .map(joltage_presses)
        .collect::<Result<Vec<u64>>>()?;

    let total: u64 = presses.iter().sum();
    Ok(total.to_string())
}
