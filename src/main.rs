// Upscales every frame in `output/` 600% with ImageMagick's point filter,
// then assembles the resized copies into `animated.gif`, looping forever.

use anyhow::Context;
use tracing::{debug, info};
use frame_animator::{AnimationSettings, animate_with_external_scaler};

fn main() -> anyhow::Result<()> {
    frame_animator::utils::logging::init();

    let settings = AnimationSettings::upscaled();
    info!("Animating {} -> {}", settings.source_dir.display(), settings.output_path.display());

    let result = animate_with_external_scaler(&settings)
        .context("failed to build upscaled animation")?;
    debug!("{}", serde_json::to_string(&result)?);

    info!("Done! {} frames written", result.frame_count());
    Ok(())
}
