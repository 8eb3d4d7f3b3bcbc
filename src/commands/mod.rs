//! Entry points used by the binaries.
//!
//! - [`animate`]: Resize (when enabled) and assemble in one call

mod animate;

pub use animate::*;
