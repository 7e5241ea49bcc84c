#![warn(missing_docs)]
//! Screen preprocessing for the DQN training core.
//!
//! Pure transforms from a raw emulator screen buffer to the 84x84 grayscale
//! [`Frame`] the training core consumes, plus an ASCII renderer for eyeball
//! debugging. The same buffer always yields the same frame.
use image::{
    imageops::{grayscale, resize, FilterType::Triangle},
    ImageBuffer, Luma, Rgb,
};
use pixelq_core::{error::PixelqError, Frame, FRAME_SIDE};
use thiserror::Error;

/// Errors of the preprocessing functions.
#[derive(Error, Debug)]
pub enum ScreenError {
    /// The declared geometry has a zero dimension.
    #[error("screen dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Declared width in pixels.
        width: u32,

        /// Declared height in pixels.
        height: u32,
    },

    /// The input buffer does not match the declared geometry.
    #[error("screen buffer for {width}x{height} must hold {expected} bytes, got {got}")]
    BadBufferLength {
        /// Declared width in pixels.
        width: u32,

        /// Declared height in pixels.
        height: u32,

        /// Byte count the geometry implies.
        expected: usize,

        /// Byte count received.
        got: usize,
    },

    /// Frame construction failure.
    #[error(transparent)]
    Frame(#[from] PixelqError),
}

fn check_geometry(
    width: u32,
    height: u32,
    bytes_per_pixel: usize,
    got: usize,
) -> Result<(), ScreenError> {
    if width == 0 || height == 0 {
        return Err(ScreenError::ZeroDimension { width, height });
    }
    let expected = (width as usize) * (height as usize) * bytes_per_pixel;
    if got != expected {
        return Err(ScreenError::BadBufferLength {
            width,
            height,
            expected,
            got,
        });
    }
    Ok(())
}

/// Warps an RGB24 screen buffer into an 84x84 grayscale frame.
///
/// The buffer holds `width * height` pixels of three bytes each, row major.
pub fn preprocess_rgb24(width: u32, height: u32, screen: Vec<u8>) -> Result<Frame, ScreenError> {
    check_geometry(width, height, 3, screen.len())?;
    // The length was validated against the geometry, so `from_vec` succeeds.
    let img = ImageBuffer::<Rgb<u8>, _>::from_vec(width, height, screen).unwrap();
    let img = resize(&img, FRAME_SIDE as u32, FRAME_SIDE as u32, Triangle);
    let img: ImageBuffer<Luma<u8>, _> = grayscale(&img);
    Ok(Frame::from_vec(img.into_raw())?)
}

/// Warps an already-grayscale screen buffer into an 84x84 frame.
///
/// The buffer holds one byte per pixel, row major.
pub fn preprocess_luma8(width: u32, height: u32, screen: Vec<u8>) -> Result<Frame, ScreenError> {
    check_geometry(width, height, 1, screen.len())?;
    let img = ImageBuffer::<Luma<u8>, _>::from_vec(width, height, screen).unwrap();
    let img = resize(&img, FRAME_SIDE as u32, FRAME_SIDE as u32, Triangle);
    Ok(Frame::from_vec(img.into_raw())?)
}

/// Characters from dark to bright.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Renders a frame as ASCII art, one line per pixel row.
pub fn draw_frame(frame: &Frame) -> String {
    let mut out = String::with_capacity((FRAME_SIDE + 1) * FRAME_SIDE);
    for row in frame.pixels().chunks(FRAME_SIDE) {
        for &p in row {
            out.push(RAMP[p as usize * RAMP.len() / 256] as char);
        }
        out.push('\n');
    }
    out
}
