use aoc2025_day_10::*;

fn main() {
    // Run registered benchmarks.
    divan::main();
}

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(include_str!("../input1.txt"))).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(include_str!("../input2.txt"))).unwrap();
}

#[divan::bench(args = [
    "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}",
    "[.###] (0,1,2) (0,2) (2) (0,2,3) (0) {39,8,26,7}",
])]
fn dfs_vs_bisection(bencher: divan::Bencher, line: &str) {
    let scenario = parser::parse_scenario(line).unwrap();
    bencher.bench_local(|| {
        let mut direct = Solution::for_scenario(&scenario).unwrap();
        dfs_solve(&scenario, scenario.target(), &mut direct).unwrap();
        let mut bisected = Solution::for_scenario(&scenario).unwrap();
        bisection_solve(&scenario, scenario.target(), &mut bisected).unwrap();
        divan::black_box((direct, bisected))
    });
}
