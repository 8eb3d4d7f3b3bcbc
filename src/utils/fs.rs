use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use crate::utils::{AnimatorError, AnimatorResult};

/// Lists regular files in `dir`, sorted by file name.
///
/// Sorting makes discovery order independent of the filesystem's directory
/// iteration order.
pub fn list_files(dir: impl AsRef<Path>) -> AnimatorResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir)
        .map_err(|e| AnimatorError::io(format!("Failed to read {}: {}", dir.display(), e)))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// File name of `path` as UTF-8, or an empty string.
pub fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

/// Check if directory exists
pub fn dir_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_dir()
}

/// Resolves `program` against the `PATH` environment variable.
///
/// Paths containing a separator are checked directly.
pub fn find_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .flat_map(|dir| executable_names(program).map(move |name| dir.join(name)))
        .find(|p| p.is_file())
}

#[cfg(windows)]
fn executable_names(program: &str) -> impl Iterator<Item = String> + '_ {
    [String::from(program), format!("{program}.exe")].into_iter()
}

#[cfg(not(windows))]
fn executable_names(program: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(String::from(program))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_files_sorted_and_skips_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        for name in ["b.png", "a.png", "10.png"] {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }
        fs::create_dir(tmp.path().join("nested")).unwrap();

        let names: Vec<String> = list_files(tmp.path())
            .unwrap()
            .iter()
            .map(|p| file_name(p).to_string())
            .collect();
        assert_eq!(names, vec!["10.png", "a.png", "b.png"]);
    }

    #[test]
    fn test_list_files_missing_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = list_files(tmp.path().join("missing")).unwrap_err();
        assert!(matches!(err, AnimatorError::IO(_)));
    }

    #[test]
    fn test_find_program_direct_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let tool = tmp.path().join("scaler");
        fs::write(&tool, b"").unwrap();

        assert_eq!(find_program(tool.to_str().unwrap()), Some(tool.clone()));
        assert_eq!(find_program(tmp.path().join("absent").to_str().unwrap()), None);
    }

    #[test]
    fn test_find_program_unknown_name() {
        assert_eq!(find_program("surely-not-a-real-program-name-4821"), None);
    }
}
