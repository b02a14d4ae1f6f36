use aoc2025_day_10::parser::parse_scenario;
use aoc2025_day_10::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

/// A machine of at most 5 buttons and 4 dimensions, with a target reachable by the
/// returned presses. Seeded, so every run sees the same machines.
fn generate(seed: u64) -> (Scenario, Solution) {
    let mut rng = StdRng::seed_from_u64(seed);
    let dimensions: usize = rng.random_range(1..=4);
    let button_count: usize = rng.random_range(1..=5);

    let buttons: Vec<Button> = (0..button_count)
        .map(|_| {
            let mut indices: Vec<usize> = (0..dimensions).filter(|_| rng.random_bool(0.5)).collect();
            if indices.is_empty() {
                indices.push(rng.random_range(0..dimensions));
            }
            Button::from_indices(&indices, dimensions).unwrap()
        })
        .collect();
    let lit: Vec<usize> = (0..dimensions).filter(|_| rng.random_bool(0.5)).collect();
    let indicator = Button::from_indices(&lit, dimensions).unwrap();
    let presses: Vec<u16> = (0..button_count).map(|_| rng.random_range(0..=2)).collect();

    let blank = Scenario::new(
        indicator.clone(),
        buttons.clone(),
        Vector::zeros(dimensions).unwrap(),
    )
    .unwrap();
    let presses = Solution::from_slice(&presses).unwrap();
    let target = presses.replay(&blank).unwrap();

    (Scenario::new(indicator, buttons, target).unwrap(), presses)
}

/// Smallest proper subset of buttons whose toggles light exactly `mask`.
fn fewest_toggles(scenario: &Scenario, mask: &Button) -> Option<u32> {
    if mask.is_zero() {
        return Some(0);
    }

    let full = (1u32 << scenario.button_count()) - 1;
    (1..full)
        .filter(|subset| {
            (0..scenario.dimensions()).all(|index| {
                let lit = scenario
                    .buttons()
                    .iter()
                    .enumerate()
                    .filter(|(id, button)| subset & (1u32 << id) != 0 && button.get(index))
                    .count()
                    % 2
                    == 1;
                lit == mask.get(index)
            })
        })
        .map(u32::count_ones)
        .min()
}

#[test]
fn mask_solver_finds_the_smallest_subset() {
    for seed in 1..=256 {
        let (scenario, _) = generate(seed);
        let mut solution = Solution::for_scenario(&scenario).unwrap();
        let result = solve_mask(&scenario, scenario.indicator(), &mut solution);

        match fewest_toggles(&scenario, scenario.indicator()) {
            Some(fewest) => {
                let reached = result.unwrap();
                assert_eq!(solution.total_presses(), u64::from(fewest), "seed {seed}");
                assert!(solution.presses().iter().all(|&count| count <= 1));
                assert_eq!(solution.replay(&scenario), Ok(reached.clone()));
                assert_eq!(reached.matches_mask(scenario.indicator()), Ok(true));
            }
            None => assert_eq!(result, Err(SolveError::NoSolution), "seed {seed}"),
        }
    }
}

#[test]
fn dfs_reaches_every_reachable_target() {
    for seed in 1..=256 {
        let (scenario, _) = generate(seed);
        let mut solution = Solution::for_scenario(&scenario).unwrap();
        dfs_solve(&scenario, scenario.target(), &mut solution).unwrap();
        assert_eq!(
            solution.verify(&scenario, scenario.target()),
            Ok(()),
            "seed {seed}"
        );
    }
}

#[test]
fn bisection_solutions_replay_to_the_target() {
    let mut solved = 0;
    for seed in 1..=256 {
        let (scenario, _) = generate(seed);
        let mut solution = Solution::for_scenario(&scenario).unwrap();
        match bisection_solve(&scenario, scenario.target(), &mut solution) {
            Ok(()) => {
                assert_eq!(
                    solution.verify(&scenario, scenario.target()),
                    Ok(()),
                    "seed {seed}"
                );
                solved += 1;
            }
            Err(error) => assert_eq!(error, SolveError::NoSolution, "seed {seed}"),
        }
    }
    assert!(solved >= 240, "only {solved} machines bisected");
}

#[test]
fn bisection_can_halve_into_a_dead_end() {
    // {3,4,0,2} halves twice into {0,1,0,0}, which no button produces on its own.
    let scenario = parse_scenario("[....] (0) (3) (1,3) (0,1) (1,2) {3,4,0,2}").unwrap();

    let mut bisected = Solution::for_scenario(&scenario).unwrap();
    assert_eq!(
        bisection_solve(&scenario, scenario.target(), &mut bisected),
        Err(SolveError::NoSolution)
    );

    let mut direct = Solution::for_scenario(&scenario).unwrap();
    dfs_solve(&scenario, scenario.target(), &mut direct).unwrap();
    assert_eq!(direct.presses(), &[1, 0, 2, 2, 0]);
}

#[rstest]
#[case("[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}")]
#[case("[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}")]
#[case("[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}")]
fn solvers_agree_on_the_destination(#[case] line: &str) {
    let scenario = parse_scenario(line).unwrap();

    let mut direct = Solution::for_scenario(&scenario).unwrap();
    dfs_solve(&scenario, scenario.target(), &mut direct).unwrap();
    let mut bisected = Solution::for_scenario(&scenario).unwrap();
    bisection_solve(&scenario, scenario.target(), &mut bisected).unwrap();

    assert_eq!(direct.replay(&scenario), bisected.replay(&scenario));
    assert_eq!(direct.replay(&scenario).as_ref(), Ok(scenario.target()));
}

#[test]
fn zero_target_needs_no_presses() {
    let scenario = parse_scenario("[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {0,0,0,0}").unwrap();

    let mut direct = Solution::for_scenario(&scenario).unwrap();
    dfs_solve(&scenario, scenario.target(), &mut direct).unwrap();
    let mut bisected = Solution::for_scenario(&scenario).unwrap();
    bisection_solve(&scenario, scenario.target(), &mut bisected).unwrap();

    assert_eq!(direct.total_presses(), 0);
    assert_eq!(bisected.total_presses(), 0);
}
