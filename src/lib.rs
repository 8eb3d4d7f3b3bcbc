// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;

// Public exports for external consumers
pub use crate::core::{AnimationSettings, AssemblyResult, FrameIndex, FrameKey, LoopBehavior, ResizeSettings};
pub use crate::utils::{AnimatorError, AnimatorResult};
pub use commands::*;
