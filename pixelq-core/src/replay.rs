//! Bounded FIFO replay memory with uniform sampling.
use crate::error::PixelqError;
use crate::transition::Transition;
use rand::Rng;
use std::collections::{vec_deque, VecDeque};

/// Bounded FIFO store of past transitions.
///
/// The buffer is a sliding window over the most recent `capacity`
/// transitions: appending at capacity evicts the oldest entry first, and
/// eviction is never an error. Single threaded by design; the owning agent
/// serializes access.
pub struct ReplayMemory {
    capacity: usize,
    transitions: VecDeque<Transition>,
}

impl ReplayMemory {
    /// Builds an empty memory retaining at most `capacity` transitions.
    pub fn new(capacity: usize) -> Result<Self, PixelqError> {
        if capacity == 0 {
            return Err(PixelqError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity),
        })
    }

    /// Appends a transition, evicting the oldest entry when at capacity.
    pub fn push(&mut self, transition: Transition) {
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Draws `k` transitions independently and uniformly, with replacement.
    ///
    /// Fails with [`PixelqError::InsufficientData`] while fewer than `k`
    /// transitions are buffered.
    pub fn sample<R: Rng>(&self, k: usize, rng: &mut R) -> Result<Vec<&Transition>, PixelqError> {
        if self.transitions.len() < k {
            return Err(PixelqError::InsufficientData {
                requested: k,
                available: self.transitions.len(),
            });
        }
        Ok((0..k)
            .map(|_| &self.transitions[rng.gen_range(0..self.transitions.len())])
            .collect())
    }

    /// Current occupancy.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no transitions are buffered.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Maximum number of retained transitions.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the buffered transitions, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Transition> {
        self.transitions.iter()
    }
}
