use std::fmt;

use crate::config::MANIFEST_AUTHOR_FOOTER;

/// One `<name> - <size> KB` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLine {
    pub name: String,
    pub size_bytes: u64,
}

impl FileLine {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    pub fn size_kib(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

impl fmt::Display for FileLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {:.2} KB", self.name, self.size_kib())
    }
}

/// Contents of a folder's `info.txt`.
///
/// Rendered lines are joined with `\n` and the footer is not followed by a
/// newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub folder: String,
    pub files: Vec<FileLine>,
}

impl Manifest {
    pub fn new(folder: impl Into<String>, files: Vec<FileLine>) -> Self {
        Self {
            folder: folder.into(),
            files,
        }
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Folder: {}", self.folder)?;
        writeln!(f, "Files: {}", self.files.len())?;
        writeln!(f)?;
        for line in &self.files {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        f.write_str(MANIFEST_AUTHOR_FOOTER)
    }
}
