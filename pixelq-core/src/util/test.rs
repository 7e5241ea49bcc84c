//! Fixtures shared by unit and integration tests.
//!
//! Frames here are constant-intensity, and a state is keyed by the intensity
//! of its newest frame. That keying lets [`TableEvaluator`] serve value rows
//! from plain maps instead of a differentiable model.
use crate::action::Action;
use crate::evaluator::{ParamSet, ValueEvaluator};
use crate::frame::{Frame, FrameRef};
use crate::state::State;
use crate::transition::Transition;
use anyhow::{bail, Result};
use ndarray::Array2;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A shared constant-intensity frame.
pub fn frame(intensity: u8) -> FrameRef {
    Frame::filled(intensity).into_shared()
}

/// A state whose four frames all carry the given intensity.
pub fn state(intensity: u8) -> State {
    State::from([
        frame(intensity),
        frame(intensity),
        frame(intensity),
        frame(intensity),
    ])
}

/// A transition between constant-intensity states.
///
/// `next_key == None` makes the transition terminal.
pub fn transition(key: u8, action: Action, reward: f32, next_key: Option<u8>) -> Transition {
    Transition::new(state(key), action, reward, next_key.map(frame))
}

/// Arguments captured from one [`ValueEvaluator::train_step`] call.
#[derive(Debug, Clone)]
pub struct TrainStep {
    /// State keys of the minibatch, in row order.
    pub keys: Vec<u8>,

    /// Regression targets handed to the step.
    pub targets: Array2<f32>,

    /// Loss masks handed to the step.
    pub masks: Array2<f32>,
}

#[derive(Debug, Default)]
struct Tables {
    live: HashMap<u8, Vec<f32>>,
    frozen: HashMap<u8, Vec<f32>>,
    evaluate_calls: usize,
    train_steps: Vec<TrainStep>,
    fail_evaluate: bool,
    loaded_weights: Vec<PathBuf>,
    restored_state: Vec<PathBuf>,
}

/// Table-driven stand-in for a differentiable value evaluator.
///
/// Unknown state keys evaluate to all-zero rows. Clones share the underlying
/// tables, so a test can keep a control handle after moving the evaluator
/// into an agent.
#[derive(Clone)]
pub struct TableEvaluator {
    n_actions: usize,
    tables: Rc<RefCell<Tables>>,
}

impl TableEvaluator {
    /// An evaluator with empty tables and the given output width.
    pub fn new(n_actions: usize) -> Self {
        Self {
            n_actions,
            tables: Rc::new(RefCell::new(Tables::default())),
        }
    }

    /// The key of a state: the intensity of its newest frame.
    pub fn state_key(state: &State) -> u8 {
        state.newest().pixels()[0]
    }

    /// Sets the live value row of a state key.
    pub fn set_live(&self, key: u8, row: Vec<f32>) {
        self.tables.borrow_mut().live.insert(key, row);
    }

    /// Sets the frozen value row of a state key.
    pub fn set_frozen(&self, key: u8, row: Vec<f32>) {
        self.tables.borrow_mut().frozen.insert(key, row);
    }

    /// The frozen value row of a state key, if set.
    pub fn frozen_row(&self, key: u8) -> Option<Vec<f32>> {
        self.tables.borrow().frozen.get(&key).cloned()
    }

    /// Makes every subsequent `evaluate` call fail.
    pub fn fail_evaluations(&self) {
        self.tables.borrow_mut().fail_evaluate = true;
    }

    /// Number of `evaluate` calls so far.
    pub fn evaluate_calls(&self) -> usize {
        self.tables.borrow().evaluate_calls
    }

    /// Arguments of every `train_step` call so far, in call order.
    pub fn train_steps(&self) -> Vec<TrainStep> {
        self.tables.borrow().train_steps.clone()
    }

    /// Paths handed to `load_weights` so far.
    pub fn loaded_weights(&self) -> Vec<PathBuf> {
        self.tables.borrow().loaded_weights.clone()
    }

    /// Paths handed to `restore_training_state` so far.
    pub fn restored_state(&self) -> Vec<PathBuf> {
        self.tables.borrow().restored_state.clone()
    }

    fn rows(&self, params: ParamSet, states: &[State]) -> Array2<f32> {
        let tables = self.tables.borrow();
        let table = match params {
            ParamSet::Live => &tables.live,
            ParamSet::Frozen => &tables.frozen,
        };
        let mut values = Array2::<f32>::zeros((states.len(), self.n_actions));
        for (i, state) in states.iter().enumerate() {
            if let Some(row) = table.get(&Self::state_key(state)) {
                for (j, v) in row.iter().enumerate() {
                    values[[i, j]] = *v;
                }
            }
        }
        values
    }
}

impl ValueEvaluator for TableEvaluator {
    fn evaluate(&self, params: ParamSet, states: &[State]) -> Result<Array2<f32>> {
        {
            let mut tables = self.tables.borrow_mut();
            tables.evaluate_calls += 1;
            if tables.fail_evaluate {
                bail!("evaluate failed as arranged");
            }
        }
        Ok(self.rows(params, states))
    }

    fn train_step(
        &mut self,
        states: &[State],
        targets: &Array2<f32>,
        masks: &Array2<f32>,
    ) -> Result<()> {
        let keys = states.iter().map(Self::state_key).collect();
        self.tables.borrow_mut().train_steps.push(TrainStep {
            keys,
            targets: targets.clone(),
            masks: masks.clone(),
        });
        Ok(())
    }

    fn clone_into_frozen(&mut self) -> Result<()> {
        let mut tables = self.tables.borrow_mut();
        tables.frozen = tables.live.clone();
        Ok(())
    }

    fn iterations(&self) -> usize {
        self.tables.borrow().train_steps.len()
    }

    fn load_weights(&mut self, path: &Path) -> Result<()> {
        self.tables
            .borrow_mut()
            .loaded_weights
            .push(path.to_owned());
        Ok(())
    }

    fn restore_training_state(&mut self, path: &Path) -> Result<()> {
        self.tables
            .borrow_mut()
            .restored_state
            .push(path.to_owned());
        Ok(())
    }
}
