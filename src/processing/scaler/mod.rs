//! Point-filter image scaling.
//!
//! The resizer only talks to the [`ImageScaler`] trait. Two implementations
//! exist:
//!
//! - [`ExternalScaler`]: Shells out to ImageMagick's `convert -filter point`.
//! - [`NativeScaler`]: Nearest-neighbour resize with the `image` crate, no
//!   external binary required.

mod external;
mod native;

use std::path::Path;
use crate::utils::AnimatorResult;

pub use external::ExternalScaler;
pub use native::NativeScaler;

/// Capability to upscale one image file into another with a point filter.
pub trait ImageScaler {
    /// Short name used in log messages.
    fn name(&self) -> &str;

    /// Fails with a precondition error if the scaler cannot run on this host.
    fn ensure_available(&self) -> AnimatorResult<()>;

    /// Scales `input` by `percent` and writes the result to `output`.
    fn scale(&self, input: &Path, output: &Path, percent: u32) -> AnimatorResult<()>;
}
