//! Full frame-to-GIF pipeline.

use tracing::{debug, info};
use crate::core::{AnimationSettings, AssemblyResult};
use crate::processing::{AnimationAssembler, ExternalScaler, FrameResizer, ImageScaler};
use crate::utils::{AnimatorResult, validate_settings};

/// Resizes the source frames (if the settings ask for it) and assembles the GIF.
///
/// The resizer runs to completion before assembly starts. Any error stops the
/// run immediately.
///
/// # Arguments
/// * `settings` - Paths, timing, loop behaviour and optional resize step
/// * `scaler` - Point-filter scaler used by the resize step
///
/// # Returns
/// The summary of the written animation.
pub fn animate<S: ImageScaler + ?Sized>(
    settings: &AnimationSettings,
    scaler: &S,
) -> AnimatorResult<AssemblyResult> {
    validate_settings(settings)?;

    if let Some(resize) = &settings.resize {
        let resized = FrameResizer::new(scaler, resize).resize_dir(&settings.source_dir)?;
        info!("Resized {} frames", resized.resized.len());
    } else {
        debug!("Resize step disabled");
    }

    AnimationAssembler::new(settings).assemble()
}

/// Runs [`animate`] with the command-line scaler named in the settings.
pub fn animate_with_external_scaler(settings: &AnimationSettings) -> AnimatorResult<AssemblyResult> {
    let scaler = settings
        .resize
        .as_ref()
        .map(ExternalScaler::from_settings)
        .unwrap_or_default();
    animate(settings, &scaler)
}
