//! DQN agent.
use super::DqnConfig;
use crate::action::{Action, ActionSet, ActionValue};
use crate::error::PixelqError;
use crate::evaluator::{ParamSet, ValueEvaluator};
use crate::policy::EpsilonGreedy;
use crate::record::{Record, RecordValue};
use crate::replay::ReplayMemory;
use crate::state::State;
use crate::transition::Transition;
use anyhow::Result;
use log::{debug, info};
use ndarray::Array2;
use rand::{rngs::StdRng, SeedableRng};
use std::path::Path;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Deep Q-learning agent over stacks of preprocessed screen frames.
///
/// The agent owns the replay memory, the epsilon-greedy policy, the random
/// number generator and the value evaluator, and drives them through the
/// classic loop: act, store the transition, sample a minibatch, regress the
/// live values towards bootstrap targets read from the frozen parameters.
///
/// The evaluator's two parameter sets move through this state machine:
///
/// ```mermaid
/// graph LR
///     A["build: frozen = live"] -->|train_step| B["live drifts from frozen"]
///     B -->|train_step| B
///     B -->|sync_target| C["frozen = live"]
///     C -->|train_step| B
/// ```
///
/// [`Dqn::update`] never synchronizes the frozen set; the cadence of
/// [`Dqn::sync_target`] calls is the driver's tuning decision.
pub struct Dqn<V: ValueEvaluator> {
    evaluator: V,
    memory: ReplayMemory,
    policy: EpsilonGreedy,
    batch_size: usize,
    discount_factor: f64,
    rng: StdRng,
}

impl<V: ValueEvaluator> Dqn<V> {
    /// Builds an agent from a configuration and a value evaluator.
    ///
    /// Fails on an empty action set, zero replay capacity, zero batch size
    /// or a discount factor outside `[0, 1)`. On success the frozen
    /// parameters are replaced with a copy of the live ones, so the first
    /// updates bootstrap from the initial live values.
    pub fn build(config: DqnConfig, mut evaluator: V) -> Result<Self> {
        let DqnConfig {
            actions,
            replay_capacity,
            discount_factor,
            batch_size,
            seed,
        } = config;

        if batch_size == 0 {
            return Err(PixelqError::ZeroBatchSize.into());
        }
        if !(0.0..1.0).contains(&discount_factor) {
            return Err(PixelqError::InvalidDiscountFactor(discount_factor).into());
        }
        let actions = ActionSet::new(actions)?;
        let memory = ReplayMemory::new(replay_capacity)?;
        evaluator.clone_into_frozen()?;
        info!(
            "Built DQN agent: {} actions, replay capacity {}",
            actions.len(),
            memory.capacity()
        );

        Ok(Self {
            evaluator,
            memory,
            policy: EpsilonGreedy::new(actions),
            batch_size,
            discount_factor,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Appends a transition to the replay memory, evicting the oldest one
    /// when the memory is full.
    pub fn add_transition(&mut self, transition: Transition) {
        self.memory.push(transition);
    }

    /// Selects an action for the state with the given exploration rate.
    pub fn select_action(&mut self, state: &State, epsilon: f64) -> Result<Action> {
        self.policy
            .select_action(&self.evaluator, state, epsilon, &mut self.rng)
    }

    /// Greedy actions and value estimates for a batch of states, through a
    /// single evaluator call.
    pub fn select_actions_greedily(&self, states: &[State]) -> Result<Vec<ActionValue>> {
        self.policy.select_greedily(&self.evaluator, states)
    }

    /// Performs one minibatch update on the live parameters.
    ///
    /// Returns `Ok(None)` while the replay memory holds fewer transitions
    /// than one minibatch. Otherwise samples uniformly with replacement,
    /// builds one-hot masked regression targets
    /// (`reward` for terminal transitions, `reward + gamma * max` over the
    /// frozen successor values for the rest), takes one gradient step and
    /// reports the target statistics.
    pub fn update(&mut self) -> Result<Option<Record>> {
        let batch = match self.memory.sample(self.batch_size, &mut self.rng) {
            Ok(batch) => batch,
            Err(PixelqError::InsufficientData {
                requested,
                available,
            }) => {
                debug!(
                    "Skipped update: {} transitions stored, {} needed",
                    available, requested
                );
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let n = batch.len();

        // Successor values come from the frozen parameters, one evaluator
        // call for all non-terminal transitions. Terminal ones keep `None`.
        let (ixs, next_states): (Vec<usize>, Vec<State>) = batch
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.next_state().map(|s| (i, s)))
            .unzip();
        let mut next_max: Vec<Option<f32>> = vec![None; n];
        if !next_states.is_empty() {
            let frozen = self.evaluator.evaluate(ParamSet::Frozen, &next_states)?;
            for (ix, row) in ixs.iter().zip(frozen.outer_iter()) {
                next_max[*ix] = Some(row.fold(f32::NEG_INFINITY, |acc, &v| acc.max(v)));
            }
        }

        let n_actions = self.policy.actions().len();
        let gamma = self.discount_factor as f32;
        let mut targets = Array2::<f32>::zeros((n, n_actions));
        let mut masks = Array2::<f32>::zeros((n, n_actions));
        let mut tgt_sum = 0f32;
        let mut tgt_max = f32::NEG_INFINITY;
        for (i, transition) in batch.iter().enumerate() {
            let col = self.policy.actions().index_of(transition.action)?;
            let target = match next_max[i] {
                Some(best) => transition.reward + gamma * best,
                None => transition.reward,
            };
            targets[[i, col]] = target;
            masks[[i, col]] = 1.0;
            tgt_sum += target;
            tgt_max = tgt_max.max(target);
        }

        let states: Vec<State> = batch.iter().map(|t| t.state.clone()).collect();
        self.evaluator.train_step(&states, &targets, &masks)?;

        Ok(Some(Record::from_slice(&[
            ("q_tgt_mean", RecordValue::Scalar(tgt_sum / n as f32)),
            ("q_tgt_max", RecordValue::Scalar(tgt_max)),
        ])))
    }

    /// Replaces the frozen parameters with a copy of the live ones.
    pub fn sync_target(&mut self) -> Result<()> {
        self.evaluator.clone_into_frozen()?;
        info!(
            "Synchronized target parameters at iteration {}",
            self.evaluator.iterations()
        );
        Ok(())
    }

    /// Loads trained live parameters from a file. The frozen set is left
    /// untouched; call [`Dqn::sync_target`] to propagate the load.
    pub fn load_weights(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.evaluator.load_weights(path.as_ref())?;
        info!("Loaded weights from {}", path.as_ref().display());
        Ok(())
    }

    /// Restores optimizer and training state from a file.
    pub fn restore_training_state(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.evaluator.restore_training_state(path.as_ref())?;
        info!("Restored training state from {}", path.as_ref().display());
        Ok(())
    }

    /// Number of transitions currently held in the replay memory.
    pub fn memory_size(&self) -> usize {
        self.memory.len()
    }

    /// Number of gradient steps applied to the live parameters so far.
    pub fn current_iteration(&self) -> usize {
        self.evaluator.iterations()
    }

    /// Read-only access to the evaluator, for monitoring.
    pub fn evaluator(&self) -> &V {
        &self.evaluator
    }
}
