pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;
pub mod logging;

pub use error::{AnimatorError, AnimatorResult, PathError, ValidationError};
pub use validation::{validate_settings, validate_source_dir, validate_output_path};
pub use formats::{ImageFormat, format_from_extension};
pub use fs::{list_files, file_name, dir_exists, find_program};
