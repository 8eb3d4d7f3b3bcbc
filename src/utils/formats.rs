use std::path::Path;
use std::str::FromStr;
use crate::utils::AnimatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    PNG,
    GIF,
}

impl FromStr for ImageFormat {
    type Err = AnimatorError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "png" => Ok(Self::PNG),
            "gif" => Ok(Self::GIF),
            _ => Err(AnimatorError::settings(format!(
                "Unsupported image format: {}", ext
            ))),
        }
    }
}

/// Get format from file extension
pub fn format_from_extension(path: impl AsRef<Path>) -> Result<ImageFormat, AnimatorError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| AnimatorError::settings(
            format!("File has no extension: {}", path.display())
        ))?;

    ImageFormat::from_str(ext)
}
