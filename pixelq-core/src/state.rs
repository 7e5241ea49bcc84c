//! Stacked-frame input states and the sliding frame stack.
use crate::frame::{FrameRef, STACK_SIZE};

/// An input state: the last [`STACK_SIZE`] frames, oldest first.
///
/// States are cheap to clone. The frames behind them are shared, and
/// consecutive states reuse all but their newest frame.
#[derive(Debug, Clone)]
pub struct State([FrameRef; STACK_SIZE]);

impl State {
    /// The stacked frames, oldest first.
    pub fn frames(&self) -> &[FrameRef; STACK_SIZE] {
        &self.0
    }

    /// The most recent frame.
    pub fn newest(&self) -> &FrameRef {
        &self.0[STACK_SIZE - 1]
    }

    /// The successor state: the window slid by one frame.
    pub fn advance(&self, next: FrameRef) -> State {
        let mut frames = self.0.clone();
        frames.rotate_left(1);
        frames[STACK_SIZE - 1] = next;
        State(frames)
    }
}

impl From<[FrameRef; STACK_SIZE]> for State {
    fn from(frames: [FrameRef; STACK_SIZE]) -> Self {
        Self(frames)
    }
}

/// Sliding accumulator of the most recent frames, fed by the driver loop.
///
/// A fresh stack repeats the episode's first frame in every slot, so a state
/// is well formed from the first environment step onward.
#[derive(Debug, Clone)]
pub struct FrameStack([FrameRef; STACK_SIZE]);

impl FrameStack {
    /// Starts an episode with `first` in every slot.
    pub fn new(first: FrameRef) -> Self {
        Self([first.clone(), first.clone(), first.clone(), first])
    }

    /// Slides the window: drops the oldest frame, appends `frame`.
    pub fn push(&mut self, frame: FrameRef) {
        self.0.rotate_left(1);
        self.0[STACK_SIZE - 1] = frame;
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> State {
        State(self.0.clone())
    }
}
