use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use crate::core::{ResizeSettings, DEFAULT_SCALER_PROGRAM};
use crate::utils::{AnimatorError, AnimatorResult, find_program};

use super::ImageScaler;

/// Scales frames by running an ImageMagick-compatible command:
/// `<program> <input> -filter point -resize <pct>% <output>`.
pub struct ExternalScaler {
    program: String,
}

impl ExternalScaler {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn from_settings(settings: &ResizeSettings) -> Self {
        Self::new(settings.program.clone())
    }

    fn resolve(&self) -> Option<PathBuf> {
        find_program(&self.program)
    }
}

impl Default for ExternalScaler {
    fn default() -> Self {
        Self::new(DEFAULT_SCALER_PROGRAM)
    }
}

impl ImageScaler for ExternalScaler {
    fn name(&self) -> &str {
        &self.program
    }

    fn ensure_available(&self) -> AnimatorResult<()> {
        match self.resolve() {
            Some(path) => {
                debug!("Using scaler at {}", path.display());
                Ok(())
            }
            None => Err(AnimatorError::precondition(format!(
                "You must have '{}' installed. On linux, you can run: `sudo apt-get install imagemagick`",
                self.program
            ))),
        }
    }

    fn scale(&self, input: &Path, output: &Path, percent: u32) -> AnimatorResult<()> {
        let output_result = Command::new(&self.program)
            .arg(input)
            .args(["-filter", "point", "-resize"])
            .arg(format!("{percent}%"))
            .arg(output)
            .output()
            .map_err(|e| AnimatorError::precondition(format!(
                "Failed to run {}: {}", self.program, e
            )))?;

        if output_result.status.success() {
            Ok(())
        } else {
            Err(AnimatorError::Subprocess {
                program: self.program.clone(),
                status: output_result.status.to_string(),
                stderr: String::from_utf8_lossy(&output_result.stderr).trim().to_string(),
            })
        }
    }
}
