#![warn(missing_docs)]
//! Training core of a DQN agent learning from raw pixel observations.
//!
//! The crate implements the training loop around an external value-function
//! approximator: a bounded experience-replay memory, an epsilon-greedy
//! policy, a frozen copy of the network parameters serving bootstrap
//! targets, and the minibatch update that turns sampled transitions into one
//! gradient step. The network itself, the emulator and the parameter file
//! formats stay behind the [`ValueEvaluator`] trait.
//!
//! A state is the stack of the four most recent 84x84 grayscale frames.
//! Overlapping stacks share frames by reference counting, and the whole
//! loop is single threaded.
//!
//! ```
//! use pixelq_core::util::test::{transition, TableEvaluator};
//! use pixelq_core::{Action, Dqn, DqnConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = DqnConfig::default()
//!         .actions(vec![Action(0), Action(1)])
//!         .batch_size(2)
//!         .seed(42);
//!     let mut agent = Dqn::build(config, TableEvaluator::new(2))?;
//!
//!     agent.add_transition(transition(0, Action(1), 1.0, Some(1)));
//!     agent.add_transition(transition(1, Action(0), 0.0, None));
//!
//!     while agent.current_iteration() < 10 {
//!         agent.update()?;
//!     }
//!     agent.sync_target()
//! }
//! ```
pub mod error;
pub mod record;
pub mod util;

mod action;
mod dqn;
mod evaluator;
mod frame;
mod policy;
mod replay;
mod state;
mod transition;

pub use action::{Action, ActionSet, ActionValue};
pub use dqn::{Dqn, DqnConfig};
pub use evaluator::{ParamSet, ValueEvaluator};
pub use frame::{Frame, FrameRef, FRAME_PIXELS, FRAME_SIDE, STACK_SIZE};
pub use policy::EpsilonGreedy;
pub use replay::ReplayMemory;
pub use state::{FrameStack, State};
pub use transition::Transition;
