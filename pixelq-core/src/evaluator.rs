//! Contract of the external value-function evaluator.
use crate::state::State;
use anyhow::Result;
use ndarray::Array2;
use std::path::Path;

/// Selects which of the evaluator's two parameter sets serves a call.
///
/// Both handles satisfy the same interface; they only name different
/// parameters. The live set receives gradient updates, the frozen set only
/// ever changes by wholesale replacement with the live set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSet {
    /// The continuously trained parameters.
    Live,

    /// The periodically synchronized copy used for bootstrap targets.
    Frozen,
}

/// The value-function contract the training core drives.
///
/// Implementations wrap a differentiable function approximator; network
/// architecture, optimizer and checkpoint file formats are the implementor's
/// concern. Failures propagate to the caller unchanged.
pub trait ValueEvaluator {
    /// Per-action value estimates: one row per state, one column per legal
    /// action in `ActionSet` order, read from the given parameter set.
    fn evaluate(&self, params: ParamSet, states: &[State]) -> Result<Array2<f32>>;

    /// Performs one gradient step on the live parameters.
    ///
    /// `masks` carries 1.0 at slots that contribute to the loss and 0.0
    /// elsewhere; masked slots must not influence the gradient.
    fn train_step(
        &mut self,
        states: &[State],
        targets: &Array2<f32>,
        masks: &Array2<f32>,
    ) -> Result<()>;

    /// Replaces the frozen parameters with a copy of the live ones.
    fn clone_into_frozen(&mut self) -> Result<()>;

    /// Number of gradient steps applied to the live parameters so far.
    ///
    /// Owned by the optimizer, so restoring training state restores it.
    fn iterations(&self) -> usize;

    /// Loads trained live parameters from `path`.
    fn load_weights(&mut self, path: &Path) -> Result<()>;

    /// Restores optimizer and training state from `path`.
    fn restore_training_state(&mut self, path: &Path) -> Result<()>;
}
