//! Errors in the library.
use crate::action::Action;
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum PixelqError {
    /// Sampling was requested before the replay memory held enough
    /// transitions. Recoverable; callers skip the step.
    #[error("insufficient data: requested {requested}, available {available}")]
    InsufficientData {
        /// Number of transitions requested.
        requested: usize,

        /// Number of transitions currently held.
        available: usize,
    },

    /// The legal-action set was empty at construction.
    #[error("legal-action set must not be empty")]
    EmptyActionSet,

    /// The replay memory capacity was zero at construction.
    #[error("replay memory capacity must be positive")]
    ZeroCapacity,

    /// The minibatch size was zero at construction.
    #[error("minibatch size must be positive")]
    ZeroBatchSize,

    /// The discount factor was outside `[0, 1)` at construction.
    #[error("discount factor must be in [0, 1), got {0}")]
    InvalidDiscountFactor(f64),

    /// A frame was built from a buffer of the wrong length.
    #[error("frame data must hold {expected} bytes, got {0}", expected = crate::frame::FRAME_PIXELS)]
    BadFrameLength(usize),

    /// An action outside the legal set reached the update step.
    #[error("action {0:?} is not in the legal-action set")]
    UnknownAction(Action),

    /// Record key error.
    #[error("record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("record value type error: {0}")]
    RecordValueTypeError(String),
}
