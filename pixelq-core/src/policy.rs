//! Epsilon-greedy action selection.
use crate::action::{Action, ActionSet, ActionValue};
use crate::evaluator::{ParamSet, ValueEvaluator};
use crate::state::State;
use anyhow::{anyhow, Result};
use ndarray::ArrayView1;
use rand::Rng;

/// Epsilon-greedy policy over a fixed set of legal actions.
///
/// With probability `epsilon` a uniformly random legal action is returned
/// and the evaluator is not consulted; otherwise the action with the highest
/// live value estimate wins. The exploration rate is an argument of each
/// call, so the caller owns its schedule.
pub struct EpsilonGreedy {
    actions: ActionSet,
}

impl EpsilonGreedy {
    /// Creates a policy over the given action set.
    pub fn new(actions: ActionSet) -> Self {
        Self { actions }
    }

    /// The legal actions this policy chooses from.
    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    /// Selects an action for a single state.
    pub fn select_action<V, R>(
        &self,
        evaluator: &V,
        state: &State,
        epsilon: f64,
        rng: &mut R,
    ) -> Result<Action>
    where
        V: ValueEvaluator,
        R: Rng,
    {
        if rng.gen::<f64>() < epsilon {
            return Ok(self.actions.sample(rng));
        }
        let mut greedy = self.select_greedily(evaluator, std::slice::from_ref(state))?;
        greedy
            .pop()
            .map(|(action, _)| action)
            .ok_or_else(|| anyhow!("evaluator returned no values for the state"))
    }

    /// Greedy actions and their value estimates for a batch of states.
    ///
    /// All states go through one `evaluate` call. Ties break towards the
    /// lowest index in the action set.
    pub fn select_greedily<V>(&self, evaluator: &V, states: &[State]) -> Result<Vec<ActionValue>>
    where
        V: ValueEvaluator,
    {
        let values = evaluator.evaluate(ParamSet::Live, states)?;
        Ok(values
            .outer_iter()
            .map(|row| self.greedy_in_row(row))
            .collect())
    }

    fn greedy_in_row(&self, row: ArrayView1<f32>) -> ActionValue {
        let mut best = (self.actions.actions()[0], f32::NEG_INFINITY);
        for (action, value) in self.actions.actions().iter().zip(row.iter()) {
            if *value > best.1 {
                best = (*action, *value);
            }
        }
        best
    }
}
