use miette::Diagnostic;
use thiserror::Error;

use crate::vector::Vector;

/// Everything that can go wrong while combining vectors or searching for presses.
///
/// Only [`SolveError::NoSolution`] and [`SolveError::DistanceUnderflow`] are part of
/// normal search control flow; the solvers absorb those locally. Every other variant
/// means the caller handed over inconsistent data and is always propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SolveError {
    #[error("operands have differing dimensions: expected {expected}, found {found}")]
    #[diagnostic(code(day_10::mismatched_dimensions))]
    MismatchedDimensions { expected: usize, found: usize },

    #[error("vector underflowed at position {index}: {value} - {subtrahend} < 0")]
    #[diagnostic(code(day_10::underflow))]
    Underflow {
        index: usize,
        value: u16,
        subtrahend: u16,
    },

    #[error("vector overflowed at position {index}: {value} + {addend} does not fit")]
    #[diagnostic(code(day_10::overflow))]
    Overflow { index: usize, value: u16, addend: u16 },

    #[error("press would overshoot the destination at position {index}: {reached} > {limit}")]
    #[diagnostic(code(day_10::distance_underflow))]
    DistanceUnderflow {
        index: usize,
        reached: u16,
        limit: u16,
    },

    #[error("could not divide {value} at position {index} by {factor}")]
    #[diagnostic(code(day_10::indivisible))]
    Indivisible { index: usize, value: u16, factor: u16 },

    #[error("search exhausted without reaching the destination")]
    #[diagnostic(
        code(day_10::no_solution),
        help("the buttons of this machine cannot produce the requested vector")
    )]
    NoSolution,

    #[error("solution tracks {found} buttons, but the scenario has {expected}")]
    #[diagnostic(code(day_10::mismatched_button_count))]
    MismatchedButtonCount { expected: usize, found: usize },

    #[error("capacity of {capacity} is insufficient for {requested} entries")]
    #[diagnostic(code(day_10::insufficient_capacity))]
    InsufficientCapacity { capacity: usize, requested: usize },

    #[error("button #{id} does not exist in a scenario with {button_count} buttons")]
    #[diagnostic(code(day_10::button_not_found))]
    ButtonNotFound { id: usize, button_count: usize },

    #[error("press count of button #{id} overflowed")]
    #[diagnostic(code(day_10::press_overflow))]
    PressOverflow { id: usize },

    #[error("solution replays to {found}, expected {expected}")]
    #[diagnostic(code(day_10::replay_mismatch))]
    ReplayMismatch { expected: Vector, found: Vector },
}

pub type Result<T, E = SolveError> = std::result::Result<T, E>;
