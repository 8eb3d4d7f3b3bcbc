//! Core types for animation settings and results.

use std::path::PathBuf;
use serde::Serialize;

/// Directory the frames are read from.
pub const SOURCE_DIR: &str = "output";
/// Path of the assembled animation.
pub const OUTPUT_PATH: &str = "animated.gif";
/// Marker inserted into the names of upscaled copies.
pub const RESIZED_MARKER: &str = "resized";
/// Default external point-filter scaler (ImageMagick).
pub const DEFAULT_SCALER_PROGRAM: &str = "convert";

/// Configuration for one animation run.
///
/// The two presets, [`AnimationSettings::upscaled`] and
/// [`AnimationSettings::raw`], hold the fixed constants of each pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationSettings {
    /// Directory scanned for frames (and where resized copies are written)
    #[serde(rename = "sourceDir")]
    pub source_dir: PathBuf,
    /// Where the GIF is written; overwritten if present
    #[serde(rename = "outputPath")]
    pub output_path: PathBuf,
    /// Which files in `source_dir` count as frames
    #[serde(rename = "framePattern")]
    pub frame_pattern: FramePattern,
    /// Display time of every frame in milliseconds
    #[serde(rename = "frameDelayMs")]
    pub frame_delay_ms: u32,
    /// Loop behaviour of the finished animation
    pub repeat: LoopBehavior,
    /// Upscale frames before assembly; `None` skips the resizer
    pub resize: Option<ResizeSettings>,
}

impl AnimationSettings {
    /// Upscales every frame 600% with a point filter, then animates the
    /// resized copies at 8ms per frame, looping forever.
    pub fn upscaled() -> Self {
        Self {
            source_dir: PathBuf::from(SOURCE_DIR),
            output_path: PathBuf::from(OUTPUT_PATH),
            frame_pattern: FramePattern::ResizedOnly,
            frame_delay_ms: 8,
            repeat: LoopBehavior::Infinite,
            resize: Some(ResizeSettings::default()),
        }
    }

    /// Animates the frames as-is at 16ms per frame with the encoder's
    /// default repeat behaviour.
    pub fn raw() -> Self {
        Self {
            source_dir: PathBuf::from(SOURCE_DIR),
            output_path: PathBuf::from(OUTPUT_PATH),
            frame_pattern: FramePattern::AllPng,
            frame_delay_ms: 16,
            repeat: LoopBehavior::EncoderDefault,
            resize: None,
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self::upscaled()
    }
}

/// Settings for the point-filter resize step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResizeSettings {
    /// Magnification as a percentage (600 = six times larger)
    #[serde(rename = "scalePercent")]
    pub scale_percent: u32,
    /// External program used by the command-line scaler
    pub program: String,
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            scale_percent: 600,
            program: DEFAULT_SCALER_PROGRAM.to_string(),
        }
    }
}

/// File selection rule for frame discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FramePattern {
    /// `*.png`
    AllPng,
    /// `*_resized.png`
    ResizedOnly,
}

impl FramePattern {
    pub fn matches(&self, file_name: &str) -> bool {
        let Some(stem) = file_name.strip_suffix(".png") else {
            return false;
        };
        match self {
            Self::AllPng => true,
            Self::ResizedOnly => stem.ends_with(&format!("_{RESIZED_MARKER}")),
        }
    }

    /// Glob-style description, used in messages.
    pub fn as_glob(&self) -> &'static str {
        match self {
            Self::AllPng => "*.png",
            Self::ResizedOnly => "*_resized.png",
        }
    }
}

/// How many times the animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoopBehavior {
    /// Loop forever
    Infinite,
    /// Repeat the given number of times
    Finite(u16),
    /// Write no repeat extension; most viewers play the animation once
    EncoderDefault,
}

/// Summary of a finished assembly.
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyResult {
    /// Path the GIF was written to
    #[serde(rename = "outputPath")]
    pub output_path: PathBuf,
    /// Source file names in the order they were encoded
    pub frames: Vec<String>,
    #[serde(rename = "frameDelayMs")]
    pub frame_delay_ms: u32,
    pub repeat: LoopBehavior,
    /// Size of the written GIF
    #[serde(rename = "bytesWritten")]
    pub bytes_written: u64,
}

impl AssemblyResult {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Summary of a finished resize pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResizeResult {
    /// (source, resized) path pairs in processing order
    pub resized: Vec<(PathBuf, PathBuf)>,
}
