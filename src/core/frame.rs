//! Frame files and their ordering keys.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use image::RgbaImage;
use crate::utils::{AnimatorError, AnimatorResult};

/// Substring that marks the frame which always plays last.
pub const TERMINAL_MARKER: &str = "final";

/// Integer prefix of a frame name, of any length.
///
/// Stored as a sign and a digit string without leading zeros, so
/// `99999999999999999999.png` orders like any other index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameIndex {
    negative: bool,
    digits: String,
}

impl FrameIndex {
    /// Parses an optionally signed run of ASCII digits.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, unsigned) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = unsigned.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self {
            negative: negative && digits != "0",
            digits: digits.to_string(),
        })
    }

    /// Compares magnitudes: shorter digit strings are smaller.
    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl From<i64> for FrameIndex {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            digits: value.unsigned_abs().to_string(),
        }
    }
}

impl Ord for FrameIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for FrameIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordering key of a frame.
///
/// `Terminal` sorts after every `Indexed` key; the derived `Ord` follows
/// variant order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FrameKey {
    Indexed(FrameIndex),
    Terminal,
}

impl FrameKey {
    /// Derives the key from a file name such as `7.png` or `7_resized.png`.
    ///
    /// The name is terminal if it contains `final` anywhere. Otherwise the
    /// text before the first `_` or `.` must be an integer.
    pub fn from_file_name(file_name: &str) -> AnimatorResult<Self> {
        if file_name.contains(TERMINAL_MARKER) {
            return Ok(Self::Terminal);
        }

        let base = file_name
            .split(['_', '.'])
            .next()
            .unwrap_or_default();

        FrameIndex::parse(base)
            .map(Self::Indexed)
            .ok_or_else(|| AnimatorError::parse(file_name))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
}

/// A discovered frame file with its ordering key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFile {
    pub path: PathBuf,
    pub key: FrameKey,
}

impl FrameFile {
    pub fn new(path: impl Into<PathBuf>) -> AnimatorResult<Self> {
        let path = path.into();
        let key = FrameKey::from_file_name(crate::utils::fs::file_name(&path))?;
        Ok(Self { path, key })
    }

    pub fn file_name(&self) -> &str {
        crate::utils::fs::file_name(&self.path)
    }
}

/// A decoded frame, ready for encoding.
pub struct Frame {
    pub file: FrameFile,
    pub image: RgbaImage,
}

impl Frame {
    /// Decodes `file` into an RGBA buffer.
    pub fn load(file: FrameFile) -> AnimatorResult<Self> {
        let image = image::open(&file.path)
            .map_err(|e| AnimatorError::decode(&file.path, e))?
            .to_rgba8();
        Ok(Self { file, image })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Derives keys for `paths` and stable-sorts them into playback order.
/// Equal keys keep their input order.
///
/// Fails on the first name without a usable key.
pub fn order_frame_files<P: AsRef<Path>>(paths: &[P]) -> AnimatorResult<Vec<FrameFile>> {
    let mut frames = paths
        .iter()
        .map(|p| FrameFile::new(p.as_ref()))
        .collect::<AnimatorResult<Vec<_>>>()?;

    frames.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(frames)
}
