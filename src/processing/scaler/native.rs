use std::path::Path;
use image::imageops::FilterType;
use tracing::debug;

use crate::utils::{AnimatorError, AnimatorResult};

use super::ImageScaler;

/// In-process nearest-neighbour scaler backed by the `image` crate.
///
/// For whole-number magnifications every source pixel becomes an exact
/// `n x n` block, matching ImageMagick's point filter.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeScaler;

impl ImageScaler for NativeScaler {
    fn name(&self) -> &str {
        "native"
    }

    fn ensure_available(&self) -> AnimatorResult<()> {
        Ok(())
    }

    fn scale(&self, input: &Path, output: &Path, percent: u32) -> AnimatorResult<()> {
        let image = image::open(input).map_err(|e| AnimatorError::decode(input, e))?;

        let (width, height) = scaled_dimensions(image.width(), image.height(), percent);
        let resized = image.resize_exact(width, height, FilterType::Nearest);

        debug!(
            "Scaled '{}': {}x{} -> {}x{}",
            input.display(),
            image.width(),
            image.height(),
            width,
            height
        );

        resized
            .save(output)
            .map_err(|e| AnimatorError::io(format!("Failed to write {}: {e}", output.display())))
    }
}

/// Applies `percent` to both sides, rounding to the nearest pixel and never
/// collapsing below one pixel.
fn scaled_dimensions(width: u32, height: u32, percent: u32) -> (u32, u32) {
    let scale = |side: u32| {
        let scaled = (u64::from(side) * u64::from(percent) + 50) / 100;
        scaled.clamp(1, u64::from(u32::MAX)) as u32
    };
    (scale(width), scale(height))
}
