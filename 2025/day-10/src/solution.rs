use std::fmt;

use itertools::Itertools;

use crate::error::{Result, SolveError};
use crate::scenario::Scenario;
use crate::vector::{Amount, Vector};
use crate::MAX_BUTTONS;

/// How many times a single button is pressed.
pub type Presses = u16;

/// Press counts per button index.
///
/// Solvers only ever add to a solution (or undo their own additions while
/// backtracking); replaying it must land exactly on the destination it was solved for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    presses: heapless::Vec<Presses, MAX_BUTTONS>,
}

impl Solution {
    pub fn new(button_count: usize) -> Result<Self> {
        let mut presses = heapless::Vec::new();
        presses
            .resize(button_count, 0)
            .map_err(|_| SolveError::InsufficientCapacity {
                capacity: MAX_BUTTONS,
                requested: button_count,
            })?;
        Ok(Self { presses })
    }

    pub fn for_scenario(scenario: &Scenario) -> Result<Self> {
        Self::new(scenario.button_count())
    }

    pub fn from_slice(presses: &[Presses]) -> Result<Self> {
        let presses =
            heapless::Vec::from_slice(presses).map_err(|_| SolveError::InsufficientCapacity {
                capacity: MAX_BUTTONS,
                requested: presses.len(),
            })?;
        Ok(Self { presses })
    }

    pub fn button_count(&self) -> usize {
        self.presses.len()
    }

    pub fn presses(&self) -> &[Presses] {
        &self.presses
    }

    pub fn total_presses(&self) -> u64 {
        self.presses.iter().map(|&count| u64::from(count)).sum()
    }

    fn count_mut(&mut self, id: usize) -> Result<&mut Presses> {
        let button_count = self.presses.len();
        self.presses
            .get_mut(id)
            .ok_or(SolveError::ButtonNotFound { id, button_count })
    }

    /// Records one more press of button `id`.
    pub fn press(&mut self, id: usize) -> Result<()> {
        let count = self.count_mut(id)?;
        *count = count
            .checked_add(1)
            .ok_or(SolveError::PressOverflow { id })?;
        Ok(())
    }

    /// Takes back one press of button `id`.
    pub fn unpress(&mut self, id: usize) -> Result<()> {
        let count = self.count_mut(id)?;
        *count = count.checked_sub(1).ok_or(SolveError::Underflow {
            index: id,
            value: 0,
            subtrahend: 1,
        })?;
        Ok(())
    }

    /// Adds the press counts of `other` into `self`, all-or-nothing.
    pub fn combine(&mut self, other: &Solution) -> Result<()> {
        if self.button_count() != other.button_count() {
            return Err(SolveError::MismatchedButtonCount {
                expected: self.button_count(),
                found: other.button_count(),
            });
        }

        let combined = self
            .presses
            .iter()
            .zip(other.presses.iter())
            .enumerate()
            .map(|(id, (lhs, rhs))| lhs.checked_add(*rhs).ok_or(SolveError::PressOverflow { id }))
            .collect::<Result<Vec<_>>>()?;
        self.presses.copy_from_slice(&combined);
        Ok(())
    }

    /// Multiplies every press count by `factor`, all-or-nothing.
    pub fn scale(&mut self, factor: Presses) -> Result<()> {
        let scaled = self
            .presses
            .iter()
            .enumerate()
            .map(|(id, count)| {
                count
                    .checked_mul(factor)
                    .ok_or(SolveError::PressOverflow { id })
            })
            .collect::<Result<Vec<_>>>()?;
        self.presses.copy_from_slice(&scaled);
        Ok(())
    }

    /// Compiles the solution: the sum of every button's effect weighted by its presses.
    pub fn replay(&self, scenario: &Scenario) -> Result<Vector> {
        if self.button_count() != scenario.button_count() {
            return Err(SolveError::MismatchedButtonCount {
                expected: scenario.button_count(),
                found: self.button_count(),
            });
        }

        let mut totals = vec![0u32; scenario.dimensions()];
        for (button, &count) in scenario.buttons().iter().zip(self.presses.iter()) {
            for (total, pressed) in totals.iter_mut().zip(button.iter()) {
                if pressed {
                    *total += u32::from(count);
                }
            }
        }

        let coords = totals
            .into_iter()
            .enumerate()
            .map(|(index, total)| {
                Amount::try_from(total).map_err(|_| SolveError::Overflow {
                    index,
                    value: Amount::MAX,
                    addend: 1,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Vector::from_slice(&coords)
    }

    /// Checks that replaying this solution lands exactly on `destination`.
    pub fn verify(&self, scenario: &Scenario, destination: &Vector) -> Result<()> {
        let found = self.replay(scenario)?;
        if &found != destination {
            return Err(SolveError::ReplayMismatch {
                expected: destination.clone(),
                found,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.presses.iter().join(","))
    }
}
