//! Upscales every source frame next to its original.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::{FramePattern, ResizeResult, ResizeSettings, RESIZED_MARKER};
use crate::utils::{AnimatorResult, file_name, list_files, validate_source_dir};

use super::scaler::ImageScaler;

/// Writes `<stem>_resized.png` for each PNG frame in a directory.
pub struct FrameResizer<'a, S: ImageScaler + ?Sized> {
    scaler: &'a S,
    settings: &'a ResizeSettings,
}

impl<'a, S: ImageScaler + ?Sized> FrameResizer<'a, S> {
    pub fn new(scaler: &'a S, settings: &'a ResizeSettings) -> Self {
        Self { scaler, settings }
    }

    /// Resizes every frame in `dir` that is not already a resized copy.
    ///
    /// The scaler's availability is checked before any file is written. The
    /// first failing file aborts the pass; copies written before it are left
    /// in place.
    pub fn resize_dir(&self, dir: &Path) -> AnimatorResult<ResizeResult> {
        validate_source_dir(dir)?;
        self.scaler.ensure_available()?;

        let sources: Vec<PathBuf> = list_files(dir)?
            .into_iter()
            .filter(|path| {
                let name = file_name(path);
                let wanted = FramePattern::AllPng.matches(name) && !name.contains(RESIZED_MARKER);
                if !wanted {
                    debug!("Skipping '{}'", name);
                }
                wanted
            })
            .collect();

        info!(
            "Resizing {} frames by {}% with {}",
            sources.len(),
            self.settings.scale_percent,
            self.scaler.name()
        );

        let mut result = ResizeResult::default();
        for source in sources {
            let target = resized_path(&source);
            self.scaler.scale(&source, &target, self.settings.scale_percent)?;
            debug!("'{}' -> '{}'", file_name(&source), file_name(&target));
            result.resized.push((source, target));
        }

        Ok(result)
    }
}

/// `output/7.png` -> `output/7_resized.png`
///
/// The stem is everything before the first `.`.
pub fn resized_path(source: &Path) -> PathBuf {
    let name = file_name(source);
    let stem = name.split('.').next().unwrap_or(name);
    source.with_file_name(format!("{stem}_{RESIZED_MARKER}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::scaler::NativeScaler;
    use crate::utils::AnimatorError;
    use image::{Rgba, RgbaImage};
    use std::cell::RefCell;

    fn write_frame(dir: &Path, name: &str) {
        RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]))
            .save(dir.join(name))
            .unwrap();
    }

    /// Records calls instead of scaling; optionally fails on one input.
    struct RecordingScaler {
        available: bool,
        fail_on: Option<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl RecordingScaler {
        fn new() -> Self {
            Self { available: true, fail_on: None, calls: RefCell::new(Vec::new()) }
        }
    }

    impl ImageScaler for RecordingScaler {
        fn name(&self) -> &str {
            "recording"
        }

        fn ensure_available(&self) -> AnimatorResult<()> {
            if self.available {
                Ok(())
            } else {
                Err(AnimatorError::precondition("recording scaler missing"))
            }
        }

        fn scale(&self, input: &Path, _output: &Path, _percent: u32) -> AnimatorResult<()> {
            let name = file_name(input).to_string();
            self.calls.borrow_mut().push(name.clone());
            if self.fail_on == Some(name.as_str()) {
                return Err(AnimatorError::Subprocess {
                    program: "recording".into(),
                    status: "exit status: 1".into(),
                    stderr: String::new(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_resized_path() {
        assert_eq!(resized_path(Path::new("output/7.png")), PathBuf::from("output/7_resized.png"));
        assert_eq!(resized_path(Path::new("final.png")), PathBuf::from("final_resized.png"));
    }

    #[test]
    fn test_resize_dir_with_native_scaler() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_frame(tmp.path(), "1.png");
        write_frame(tmp.path(), "2.png");
        write_frame(tmp.path(), "final.png");
        std::fs::write(tmp.path().join("notes.txt"), b"skip me").unwrap();

        let settings = ResizeSettings::default();
        let result = FrameResizer::new(&NativeScaler, &settings)
            .resize_dir(tmp.path())
            .unwrap();

        assert_eq!(result.resized.len(), 3);
        for name in ["1_resized.png", "2_resized.png", "final_resized.png"] {
            let img = image::open(tmp.path().join(name)).unwrap();
            assert_eq!((img.width(), img.height()), (12, 12));
        }
        // Originals untouched
        assert_eq!(image::open(tmp.path().join("1.png")).unwrap().width(), 2);
    }

    #[test]
    fn test_existing_resized_files_are_skipped() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_frame(tmp.path(), "1.png");
        write_frame(tmp.path(), "1_resized.png");

        let scaler = RecordingScaler::new();
        let settings = ResizeSettings::default();
        FrameResizer::new(&scaler, &settings).resize_dir(tmp.path()).unwrap();

        assert_eq!(*scaler.calls.borrow(), vec!["1.png".to_string()]);
    }

    #[test]
    fn test_unavailable_scaler_fails_before_work() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_frame(tmp.path(), "1.png");

        let scaler = RecordingScaler { available: false, ..RecordingScaler::new() };
        let settings = ResizeSettings::default();
        let err = FrameResizer::new(&scaler, &settings)
            .resize_dir(tmp.path())
            .unwrap_err();

        assert!(matches!(err, AnimatorError::Precondition(_)));
        assert!(scaler.calls.borrow().is_empty());
    }

    #[test]
    fn test_failure_aborts_remaining_frames() {
        let tmp = tempfile::TempDir::new().unwrap();
        for name in ["1.png", "2.png", "3.png"] {
            write_frame(tmp.path(), name);
        }

        let scaler = RecordingScaler { fail_on: Some("2.png"), ..RecordingScaler::new() };
        let settings = ResizeSettings::default();
        let err = FrameResizer::new(&scaler, &settings)
            .resize_dir(tmp.path())
            .unwrap_err();

        assert!(matches!(err, AnimatorError::Subprocess { .. }));
        assert_eq!(*scaler.calls.borrow(), vec!["1.png".to_string(), "2.png".to_string()]);
    }
}
