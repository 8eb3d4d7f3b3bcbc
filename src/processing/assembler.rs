//! Discovers, orders, decodes and encodes frames into one GIF.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::{AnimationSettings, AssemblyResult, Frame, FrameFile, FramePattern, order_frame_files};
use crate::utils::{AnimatorError, AnimatorResult, file_name, list_files, validate_output_path, validate_source_dir};

use super::encoder::encode_animation;

/// Builds the animation artifact described by an [`AnimationSettings`].
pub struct AnimationAssembler<'a> {
    settings: &'a AnimationSettings,
}

impl<'a> AnimationAssembler<'a> {
    pub fn new(settings: &'a AnimationSettings) -> Self {
        Self { settings }
    }

    /// Files in the source directory matching the frame pattern, in playback order.
    pub fn discover(&self) -> AnimatorResult<Vec<FrameFile>> {
        let dir = &self.settings.source_dir;
        validate_source_dir(dir)?;

        let candidates = matching_files(dir, self.settings.frame_pattern)?;
        if candidates.is_empty() {
            return Err(AnimatorError::EmptyInput {
                dir: dir.clone(),
                pattern: self.settings.frame_pattern.as_glob().to_string(),
            });
        }

        order_frame_files(candidates.as_slice())
    }

    /// Runs the whole assembly and writes the GIF.
    ///
    /// Every frame is decoded and encoded before the output file is opened;
    /// an existing file at the output path is replaced.
    pub fn assemble(&self) -> AnimatorResult<AssemblyResult> {
        validate_output_path(&self.settings.output_path)?;

        let ordered = self.discover()?;
        let names: Vec<String> = ordered.iter().map(|f| f.file_name().to_string()).collect();
        info!("Generating gif with {} frames.", ordered.len());

        if let Some(last) = ordered.last().filter(|f| f.key.is_terminal()) {
            debug!("Terminal frame: '{}'", last.file_name());
        }

        let frames = ordered
            .into_iter()
            .map(Frame::load)
            .collect::<AnimatorResult<Vec<_>>>()?;

        let bytes = encode_animation(frames, self.settings.frame_delay_ms, self.settings.repeat)?;

        let output = &self.settings.output_path;
        fs::write(output, &bytes)
            .map_err(|e| AnimatorError::io(format!("Failed to write {}: {}", output.display(), e)))?;
        info!("Wrote {} ({} bytes)", output.display(), bytes.len());

        Ok(AssemblyResult {
            output_path: output.clone(),
            frames: names,
            frame_delay_ms: self.settings.frame_delay_ms,
            repeat: self.settings.repeat,
            bytes_written: bytes.len() as u64,
        })
    }
}

fn matching_files(dir: &Path, pattern: FramePattern) -> AnimatorResult<Vec<PathBuf>> {
    Ok(list_files(dir)?
        .into_iter()
        .filter(|path| pattern.matches(file_name(path)))
        .collect())
}
