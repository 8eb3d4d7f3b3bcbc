// Assembles the frames in `output/` as-is into `animated.gif` at 16ms per frame.

use anyhow::Context;
use tracing::{debug, info};
use frame_animator::{AnimationSettings, animate_with_external_scaler};

fn main() -> anyhow::Result<()> {
    frame_animator::utils::logging::init();

    let settings = AnimationSettings::raw();
    info!("Animating {} -> {}", settings.source_dir.display(), settings.output_path.display());

    // No resize step in this preset, so the scaler is never invoked.
    let result = animate_with_external_scaler(&settings)
        .context("failed to build animation")?;
    debug!("{}", serde_json::to_string(&result)?);

    info!("Done! {} frames written", result.frame_count());
    Ok(())
}
