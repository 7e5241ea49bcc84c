//! Fixed-size grayscale frames.
use crate::error::PixelqError;
use std::convert::TryInto;
use std::fmt;
use std::rc::Rc;

/// Side length of a preprocessed frame, in pixels.
pub const FRAME_SIDE: usize = 84;

/// Number of pixels in a preprocessed frame.
pub const FRAME_PIXELS: usize = FRAME_SIDE * FRAME_SIDE;

/// Number of frames stacked into one input state.
pub const STACK_SIZE: usize = 4;

/// Shared handle to a [`Frame`].
///
/// Consecutive states overlap in all but one frame, so frames are reference
/// counted rather than copied. The training loop is single threaded, hence
/// `Rc` and not `Arc`.
pub type FrameRef = Rc<Frame>;

/// A preprocessed grayscale frame of [`FRAME_SIDE`] x [`FRAME_SIDE`] pixels.
///
/// Immutable once constructed. The fixed-length body makes the geometry a
/// type-level invariant; [`Frame::from_vec`] rejects buffers of any other
/// size.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame(Box<[u8; FRAME_PIXELS]>);

impl Frame {
    /// Builds a frame from exactly [`FRAME_PIXELS`] bytes, row major.
    pub fn from_vec(data: Vec<u8>) -> Result<Self, PixelqError> {
        let len = data.len();
        let body: Box<[u8; FRAME_PIXELS]> = data
            .into_boxed_slice()
            .try_into()
            .map_err(|_| PixelqError::BadFrameLength(len))?;
        Ok(Self(body))
    }

    /// Builds a frame with every pixel at `intensity`.
    pub fn filled(intensity: u8) -> Self {
        Self(Box::new([intensity; FRAME_PIXELS]))
    }

    /// Pixel intensities, row major.
    pub fn pixels(&self) -> &[u8; FRAME_PIXELS] {
        &self.0
    }

    /// Wraps the frame in a shared handle.
    pub fn into_shared(self) -> FrameRef {
        Rc::new(self)
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frame({}x{}, [{}, {}, ..])",
            FRAME_SIDE, FRAME_SIDE, self.0[0], self.0[1]
        )
    }
}
