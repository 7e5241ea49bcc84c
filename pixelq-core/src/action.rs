//! Actions and the legal-action set.
use crate::error::PixelqError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An opaque, environment-supplied action identifier.
///
/// The core never interprets the id; it only maps it to and from its column
/// in the legal set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Action(pub u32);

/// An action paired with its estimated value, produced by greedy evaluation.
pub type ActionValue = (Action, f32);

/// The legal-action set, in a fixed order the evaluator output columns follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSet(Vec<Action>);

impl ActionSet {
    /// Builds the set; fails on an empty list.
    pub fn new(actions: Vec<Action>) -> Result<Self, PixelqError> {
        if actions.is_empty() {
            return Err(PixelqError::EmptyActionSet);
        }
        Ok(Self(actions))
    }

    /// Number of legal actions.
    #[allow(clippy::len_without_is_empty)] // non-empty by construction
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Actions in evaluator-column order.
    pub fn actions(&self) -> &[Action] {
        &self.0
    }

    /// The action behind evaluator column `index`.
    pub fn get(&self, index: usize) -> Option<Action> {
        self.0.get(index).copied()
    }

    /// The evaluator column of `action`.
    pub fn index_of(&self, action: Action) -> Result<usize, PixelqError> {
        self.0
            .iter()
            .position(|&a| a == action)
            .ok_or(PixelqError::UnknownAction(action))
    }

    /// A uniformly random legal action.
    pub fn sample(&self, rng: &mut impl Rng) -> Action {
        self.0[rng.gen_range(0..self.0.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(matches!(
            ActionSet::new(vec![]),
            Err(PixelqError::EmptyActionSet)
        ));
    }

    #[test]
    fn test_index_maps_both_ways() {
        let set = ActionSet::new(vec![Action(4), Action(0), Action(11)]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.index_of(Action(11)).unwrap(), 2);
        assert_eq!(set.get(1), Some(Action(0)));
        assert_eq!(set.get(3), None);
        assert!(matches!(
            set.index_of(Action(1)),
            Err(PixelqError::UnknownAction(Action(1)))
        ));
    }

    #[test]
    fn test_sample_stays_in_the_set() {
        let set = ActionSet::new(vec![Action(2), Action(5)]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..32 {
            assert!(set.index_of(set.sample(&mut rng)).is_ok());
        }
    }
}
