//! Recorded environment transitions.
use crate::action::Action;
use crate::frame::FrameRef;
use crate::state::State;

/// One recorded step of environment interaction.
///
/// `next_frame` is `None` exactly when the episode terminated after this
/// transition; terminal-versus-nonterminal dispatch happens on the option,
/// not on a separate flag.
#[derive(Debug, Clone)]
pub struct Transition {
    /// The state the action was selected from.
    pub state: State,

    /// The action taken.
    pub action: Action,

    /// The immediate reward.
    pub reward: f32,

    /// The frame observed after acting; absent on episode end.
    pub next_frame: Option<FrameRef>,
}

impl Transition {
    /// Builds a transition.
    pub fn new(state: State, action: Action, reward: f32, next_frame: Option<FrameRef>) -> Self {
        Self {
            state,
            action,
            reward,
            next_frame,
        }
    }

    /// Whether the episode ended after this transition.
    pub fn is_terminal(&self) -> bool {
        self.next_frame.is_none()
    }

    /// The successor state, absent for terminal transitions.
    ///
    /// Slides the recorded state's window by the observed next frame; the
    /// two states share the three frames that overlap.
    pub fn next_state(&self) -> Option<State> {
        self.next_frame
            .as_ref()
            .map(|next| self.state.advance(next.clone()))
    }
}
