//! Frame processing: point-filter resizing and GIF assembly.

mod assembler;
mod encoder;
mod resizer;
pub mod scaler;

pub use assembler::AnimationAssembler;
pub use encoder::encode_animation;
pub use resizer::{FrameResizer, resized_path};
pub use scaler::{ExternalScaler, ImageScaler, NativeScaler};
