use std::fmt;

use bitvec::prelude::*;
use itertools::Itertools;
use num_integer::Integer;

use crate::error::{Result, SolveError};
use crate::MAX_DIM;

/// A bit vector backed by `usize` words with Least Significant Bit first ordering.
pub type Row = BitVec<usize, Lsb0>;

/// A single coordinate of a [`Vector`].
pub type Amount = u16;

/// Squared euclidean distances; only ever used to rank candidates.
pub type Distance = u64;

/// The additive effect of pressing a button once: `1` on every dimension it touches.
///
/// The same shape doubles as a parity mask (indicator lights, skimmed odd remainders).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Button {
    effect: Row,
}

impl Button {
    pub fn new(effect: Row) -> Self {
        Self { effect }
    }

    pub fn zeros(dimensions: usize) -> Self {
        Self::new(Row::repeat(false, dimensions))
    }

    /// Builds a button from the list of dimensions it touches, e.g. `(1,3)`.
    pub fn from_indices(indices: &[usize], dimensions: usize) -> Result<Self> {
        let mut effect = Row::repeat(false, dimensions);
        for &index in indices {
            if index >= dimensions {
                return Err(SolveError::MismatchedDimensions {
                    expected: dimensions,
                    found: index + 1,
                });
            }
            effect.set(index, true);
        }
        Ok(Self::new(effect))
    }

    pub fn dimensions(&self) -> usize {
        self.effect.len()
    }

    pub fn get(&self, index: usize) -> bool {
        self.effect.get(index).is_some_and(|bit| *bit)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.effect.iter().by_vals()
    }

    pub fn is_zero(&self) -> bool {
        self.effect.not_any()
    }

    pub fn count_ones(&self) -> usize {
        self.effect.count_ones()
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.effect.iter_ones().join(","))
    }
}

/// A fixed-dimension, non-negative integer vector.
///
/// Every mutating operation validates all dimensions before writing anything, so a
/// failed operation leaves the vector exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    coords: heapless::Vec<Amount, MAX_DIM>,
}

impl Vector {
    pub fn zeros(dimensions: usize) -> Result<Self> {
        let mut coords = heapless::Vec::new();
        coords
            .resize(dimensions, 0)
            .map_err(|_| SolveError::InsufficientCapacity {
                capacity: MAX_DIM,
                requested: dimensions,
            })?;
        Ok(Self { coords })
    }

    pub fn from_slice(values: &[Amount]) -> Result<Self> {
        let coords =
            heapless::Vec::from_slice(values).map_err(|_| SolveError::InsufficientCapacity {
                capacity: MAX_DIM,
                requested: values.len(),
            })?;
        Ok(Self { coords })
    }

    pub fn from_button(button: &Button) -> Result<Self> {
        let mut vector = Self::zeros(button.dimensions())?;
        vector.add(button)?;
        Ok(vector)
    }

    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    pub fn as_slice(&self) -> &[Amount] {
        &self.coords
    }

    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|&value| value == 0)
    }

    pub fn reset(&mut self) {
        self.coords.iter_mut().for_each(|value| *value = 0);
    }

    fn ensure_dimensions(&self, found: usize) -> Result<()> {
        if self.dimensions() != found {
            return Err(SolveError::MismatchedDimensions {
                expected: self.dimensions(),
                found,
            });
        }
        Ok(())
    }

    /// Applies one press of `button`.
    pub fn add(&mut self, button: &Button) -> Result<()> {
        self.ensure_dimensions(button.dimensions())?;
        for (index, (&value, pressed)) in self.coords.iter().zip(button.iter()).enumerate() {
            if pressed && value == Amount::MAX {
                return Err(SolveError::Overflow {
                    index,
                    value,
                    addend: 1,
                });
            }
        }
        for (value, pressed) in self.coords.iter_mut().zip(button.iter()) {
            *value += Amount::from(pressed);
        }
        Ok(())
    }

    /// Reverts one press of `button`.
    ///
    /// This only guards against negative coordinates; it cannot tell whether the
    /// button was actually pressed to get here.
    pub fn subtract(&mut self, button: &Button) -> Result<()> {
        self.ensure_dimensions(button.dimensions())?;
        for (index, (&value, pressed)) in self.coords.iter().zip(button.iter()).enumerate() {
            if pressed && value == 0 {
                return Err(SolveError::Underflow {
                    index,
                    value,
                    subtrahend: 1,
                });
            }
        }
        for (value, pressed) in self.coords.iter_mut().zip(button.iter()) {
            *value -= Amount::from(pressed);
        }
        Ok(())
    }

    /// Adds `rhs` into `self`.
    pub fn combine(&mut self, rhs: &Vector) -> Result<()> {
        self.ensure_dimensions(rhs.dimensions())?;
        for (index, (&value, &addend)) in self.coords.iter().zip(rhs.coords.iter()).enumerate() {
            if value.checked_add(addend).is_none() {
                return Err(SolveError::Overflow {
                    index,
                    value,
                    addend,
                });
            }
        }
        for (value, &addend) in self.coords.iter_mut().zip(rhs.coords.iter()) {
            *value += addend;
        }
        Ok(())
    }

    /// Subtracts `rhs` from `self`, all-or-nothing.
    pub fn subtract_vector(&mut self, rhs: &Vector) -> Result<()> {
        self.ensure_dimensions(rhs.dimensions())?;
        for (index, (&value, &subtrahend)) in
            self.coords.iter().zip(rhs.coords.iter()).enumerate()
        {
            if subtrahend > value {
                return Err(SolveError::Underflow {
                    index,
                    value,
                    subtrahend,
                });
            }
        }
        for (value, &subtrahend) in self.coords.iter_mut().zip(rhs.coords.iter()) {
            *value -= subtrahend;
        }
        Ok(())
    }

    /// Integer divides every coordinate by `factor`.
    ///
    /// Fails with [`SolveError::Indivisible`] if any coordinate leaves a remainder,
    /// keeping the vector unchanged.
    pub fn divide_by_scalar(&mut self, factor: Amount) -> Result<()> {
        for (index, &value) in self.coords.iter().enumerate() {
            if factor == 0 || !Integer::is_multiple_of(&value, &factor) {
                return Err(SolveError::Indivisible {
                    index,
                    value,
                    factor,
                });
            }
        }
        for value in self.coords.iter_mut() {
            *value /= factor;
        }
        Ok(())
    }

    /// The odd remainder of every coordinate, as a 0/1 mask. `self` is untouched.
    pub fn skim_to_even(&self) -> Button {
        Button::new(
            self.coords
                .iter()
                .map(|value| Integer::is_odd(value))
                .collect::<Row>(),
        )
    }

    /// `true` iff every coordinate has the parity demanded by `mask`.
    pub fn matches_mask(&self, mask: &Button) -> Result<bool> {
        self.ensure_dimensions(mask.dimensions())?;
        Ok(self
            .coords
            .iter()
            .zip(mask.iter())
            .all(|(value, bit)| Integer::is_odd(value) == bit))
    }

    pub fn squared_length(&self) -> Distance {
        self.coords
            .iter()
            .map(|&value| Distance::from(value).pow(2))
            .sum()
    }

    pub fn squared_distance_to(&self, other: &Vector) -> Result<Distance> {
        self.ensure_dimensions(other.dimensions())?;
        Ok(self
            .coords
            .iter()
            .zip(other.coords.iter())
            .map(|(&lhs, &rhs)| Distance::from(lhs.abs_diff(rhs)).pow(2))
            .sum())
    }

    /// Squared distance between `self + button` and `destination`, without mutating `self`.
    ///
    /// Fails with [`SolveError::DistanceUnderflow`] if the press would overshoot any
    /// coordinate of `destination`; the DFS ranking uses this to drop the candidate.
    pub fn squared_distance_with_button(
        &self,
        button: &Button,
        destination: &Vector,
    ) -> Result<Distance> {
        self.ensure_dimensions(button.dimensions())?;
        self.ensure_dimensions(destination.dimensions())?;

        let mut distance = 0;
        for (index, ((&value, pressed), &limit)) in self
            .coords
            .iter()
            .zip(button.iter())
            .zip(destination.coords.iter())
            .enumerate()
        {
            let reached = u32::from(value) + u32::from(pressed);
            if reached > u32::from(limit) {
                return Err(SolveError::DistanceUnderflow {
                    index,
                    reached: value.saturating_add(Amount::from(pressed)),
                    limit,
                });
            }
            distance += Distance::from(u32::from(limit) - reached).pow(2);
        }
        Ok(distance)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.coords.iter().join(","))
    }
}
