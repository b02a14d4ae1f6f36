use crate::error::{Result, SolveError};
use crate::vector::{Button, Vector};
use crate::{MAX_BUTTONS, MAX_DIM};

/// One machine: its indicator lights, its buttons and the joltage it must reach.
///
/// All three share one dimensionality, checked on construction. Solvers only ever
/// borrow a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    indicator: Button,
    buttons: Vec<Button>,
    target: Vector,
}

impl Scenario {
    pub fn new(indicator: Button, buttons: Vec<Button>, target: Vector) -> Result<Self> {
        let dimensions = indicator.dimensions();
        if dimensions > MAX_DIM {
            return Err(SolveError::InsufficientCapacity {
                capacity: MAX_DIM,
                requested: dimensions,
            });
        }
        if buttons.len() > MAX_BUTTONS {
            return Err(SolveError::InsufficientCapacity {
                capacity: MAX_BUTTONS,
                requested: buttons.len(),
            });
        }

        let mismatch = std::iter::once(target.dimensions())
            .chain(buttons.iter().map(Button::dimensions))
            .find(|&found| found != dimensions);
        if let Some(found) = mismatch {
            return Err(SolveError::MismatchedDimensions {
                expected: dimensions,
                found,
            });
        }

        Ok(Self {
            indicator,
            buttons,
            target,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.indicator.dimensions()
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn button(&self, id: usize) -> Result<&Button> {
        self.buttons.get(id).ok_or(SolveError::ButtonNotFound {
            id,
            button_count: self.buttons.len(),
        })
    }

    pub fn indicator(&self) -> &Button {
        &self.indicator
    }

    pub fn target(&self) -> &Vector {
        &self.target
    }
}
