pub mod combination;
pub mod error;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod scenario;
pub mod solution;
pub mod solve;
pub mod vector;

pub use error::SolveError;
pub use scenario::Scenario;
pub use solution::Solution;
pub use solve::{bisection_solve, dfs_solve, solve_mask, Solver};
pub use vector::{Button, Vector};

// -----------------------------------------------------------------------------
// Constants & Configuration
// -----------------------------------------------------------------------------

/// Maximum number of dimensions (lights / joltage counters) of a machine.
pub const MAX_DIM: usize = 10;

/// Maximum number of buttons on a machine.
pub const MAX_BUTTONS: usize = 12;

/// Depth ceiling of the DFS, bounding its worst-case runtime.
pub const MAX_PRESSES: usize = 384;

/// Bisection halves the destination at every level. The skimmed remainder is a 0/1
/// mask, so this cannot be anything but 2.
pub const BALANCE_FACTOR: u16 = 2;
