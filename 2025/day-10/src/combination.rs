use crate::error::{Result, SolveError};
use crate::MAX_BUTTONS;

type Indices = heapless::Vec<usize, MAX_BUTTONS>;

#[derive(Debug, Clone)]
enum State {
    Fresh,
    Running(Indices),
    Exhausted,
}

/// Lexicographic "choose `size` of `count`" enumeration over button indices.
///
/// Yields strictly increasing index tuples, starting at `0,1,...,size-1`. Requesting
/// more indices than there are buttons clamps `size` to `count`, which yields the full
/// index set exactly once.
#[derive(Debug, Clone)]
pub struct Combinations {
    count: usize,
    size: usize,
    state: State,
}

impl Combinations {
    pub fn new(count: usize, size: usize) -> Result<Self> {
        if count > MAX_BUTTONS {
            return Err(SolveError::InsufficientCapacity {
                capacity: MAX_BUTTONS,
                requested: count,
            });
        }

        Ok(Self {
            count,
            size: size.min(count),
            state: State::Fresh,
        })
    }

    /// Rewinds to the first combination.
    pub fn reset(&mut self) {
        self.state = State::Fresh;
    }

    /// Advances to the next combination, or `None` once exhausted.
    pub fn advance(&mut self) -> Option<&[usize]> {
        let state = std::mem::replace(&mut self.state, State::Exhausted);
        self.state = match state {
            State::Fresh => {
                // `size <= count <= MAX_BUTTONS`, so this never truncates.
                State::Running((0..self.size).collect())
            }
            State::Running(mut indices) => {
                if self.step(&mut indices) {
                    State::Running(indices)
                } else {
                    tracing::trace!(
                        count = self.count,
                        size = self.size,
                        "combinations exhausted"
                    );
                    State::Exhausted
                }
            }
            State::Exhausted => State::Exhausted,
        };

        match &self.state {
            State::Running(indices) => Some(indices.as_slice()),
            _ => None,
        }
    }

    /// Moves `indices` to the next tuple in place. Returns `false` if there is none.
    ///
    /// Position `i` (left to right) tops out at `count - size + i`; find the rightmost
    /// position with room, bump it, and lay out consecutive values to its right.
    fn step(&self, indices: &mut Indices) -> bool {
        let Some(position) =
            (0..self.size).rfind(|&position| indices[position] < self.count - self.size + position)
        else {
            return false;
        };

        let mut next = indices[position] + 1;
        for index in indices[position..].iter_mut() {
            *index = next;
            next += 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[usize]>::to_vec)
    }
}
