//! Core types shared by the resizer and the assembler.
//!
//! - [`AnimationSettings`]: Configuration for one run, with fixed presets
//! - [`FrameKey`] / [`FrameFile`]: Frame ordering
//! - [`Frame`]: A decoded frame
//! - [`AssemblyResult`] / [`ResizeResult`]: Summaries of finished steps

mod frame;
mod types;

pub use frame::{Frame, FrameFile, FrameIndex, FrameKey, TERMINAL_MARKER, order_frame_files};
pub use types::{
    AnimationSettings, AssemblyResult, FramePattern, LoopBehavior, ResizeResult, ResizeSettings,
    DEFAULT_SCALER_PROGRAM, OUTPUT_PATH, RESIZED_MARKER, SOURCE_DIR,
};
