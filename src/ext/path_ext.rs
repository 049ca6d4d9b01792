use std::path::{Component, Path, PathBuf};

use snafu::{ResultExt, Snafu};

/// Makes `path` absolute against the working directory and folds `.`/`..`
/// lexically. Symlinks are left as they are.
fn absolutize(path: &Path) -> Result<PathBuf, PathResolutionError> {
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context(CurrentDirSnafu)?
            .join(path)
    };

    Ok(normalize_path(&absolute_path))
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root stays at the root
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            _ => components.push(component),
        }
    }

    components.iter().collect()
}

fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

pub trait PathExt {
    /// Absolute, lexically normalised form of the path.
    fn absolutize(&self) -> Result<PathBuf, PathResolutionError>;

    /// Last path component, or the whole path when there is none (`/`, `C:\`).
    fn display_name(&self) -> String;
}

impl PathExt for Path {
    fn absolutize(&self) -> Result<PathBuf, PathResolutionError> {
        absolutize(self)
    }

    fn display_name(&self) -> String {
        display_name(self)
    }
}

impl PathExt for PathBuf {
    fn absolutize(&self) -> Result<PathBuf, PathResolutionError> {
        absolutize(self)
    }

    fn display_name(&self) -> String {
        display_name(self)
    }
}

#[derive(Debug, Snafu)]
pub enum PathResolutionError {
    #[snafu(display("Failed to obtain current dir"))]
    CurrentDirError { source: std::io::Error },
}
