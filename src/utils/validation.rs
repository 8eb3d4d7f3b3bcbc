use std::path::Path;
use crate::core::AnimationSettings;
use crate::utils::{AnimatorError, AnimatorResult, ImageFormat, ValidationError, dir_exists, format_from_extension};

/// Validates everything that can be checked before touching any file.
///
/// Any frame delay is accepted: GIF stores whole hundredths of a second, and
/// a stored delay of 0 is a valid frame timing.
pub fn validate_settings(settings: &AnimationSettings) -> AnimatorResult<()> {
    if let Some(resize) = &settings.resize {
        if resize.scale_percent == 0 {
            return Err(AnimatorError::settings("Scale percentage cannot be 0"));
        }
        if resize.program.trim().is_empty() {
            return Err(AnimatorError::settings("Scaler program cannot be empty"));
        }
    }

    validate_output_path(&settings.output_path)?;
    Ok(())
}

/// Validates that the frame directory exists
pub fn validate_source_dir(path: impl AsRef<Path>) -> AnimatorResult<()> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !dir_exists(path) {
        return Err(ValidationError::not_a_directory(path).into());
    }

    Ok(())
}

/// Validates the output file path and format
pub fn validate_output_path(path: impl AsRef<Path>) -> AnimatorResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            return Err(ValidationError::path_not_found(parent).into());
        }
    }

    if format_from_extension(path)? != ImageFormat::GIF {
        return Err(AnimatorError::settings(
            format!("Output must be a .gif file: {}", path.display())
        ));
    }
    Ok(())
}
