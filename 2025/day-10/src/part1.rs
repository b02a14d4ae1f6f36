use indicatif::ParallelProgressIterator;
use miette::*;
use rayon::prelude::*;

use crate::parser;
use crate::scenario::Scenario;
use crate::solution::Solution;
use crate::solve::solve_mask;

/// Fewest presses lighting up the indicator of a single machine.
///
/// Lights only care about parity, so no button is ever pressed twice and the mask
/// solver's smallest subset is the answer.
fn fewest_presses(scenario: &Scenario) -> Result<u64> {
    let mut solution = Solution::for_scenario(scenario)?;
    solve_mask(scenario, scenario.indicator(), &mut solution)?;
    Ok(solution.total_presses())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let scenarios = parser::parse(input)?;

    let presses = scenarios
        .par_iter()
        .progress_count(scenarios.len() as u64)
        .map(fewest_presses)
        .collect::<Result<Vec<u64>>>()?;

    let total_presses: u64 = presses.iter().sum();
    Ok(total_presses.to_string())
}
