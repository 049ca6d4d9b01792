use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use derive_more::Display;
use snafu::{ResultExt, Snafu};

/// What a directory entry is, after following a symbolic link once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryKind {
    #[display("file")]
    File,
    #[display("directory")]
    Directory,
    /// Dangling links, sockets, fifos and device nodes
    #[display("other")]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: OsString,
    path: PathBuf,
    kind: EntryKind,
}

impl DirectoryEntry {
    pub fn name(&self) -> &OsString {
        &self.name
    }

    /// Entry name as UTF-8, non-UTF-8 sequences replaced.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Size in bytes of the file the entry points to.
    pub fn size(&self) -> Result<u64, ListingError> {
        fs::metadata(&self.path)
            .map(|metadata| metadata.len())
            .context(MetadataSnafu {
                path: self.path.clone(),
            })
    }

    fn classify(entry: &fs::DirEntry) -> Result<EntryKind, ListingError> {
        let path = entry.path();
        let file_type = entry.file_type().context(MetadataSnafu { path: &path })?;

        if !file_type.is_symlink() {
            return Ok(Self::kind_of(&file_type));
        }

        match fs::metadata(&path) {
            Ok(target) => Ok(Self::kind_of(&target.file_type())),
            Err(_) => Ok(EntryKind::Other),
        }
    }

    fn kind_of(file_type: &fs::FileType) -> EntryKind {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// Immediate entries of a single directory, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    path: PathBuf,
    entries: Vec<DirectoryEntry>,
}

impl DirectoryListing {
    pub fn read(path: impl Into<PathBuf>) -> Result<Self, ListingError> {
        let path = path.into();
        let read_dir = fs::read_dir(&path).context(ReadDirSnafu { path: &path })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.context(ReadEntrySnafu { path: &path })?;
            let kind = DirectoryEntry::classify(&entry)?;
            entries.push(DirectoryEntry {
                name: entry.file_name(),
                path: entry.path(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.iter().filter(|entry| entry.is_file())
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.iter().filter(|entry| entry.is_directory())
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&DirectoryEntry) -> bool) {
        self.entries.retain(keep);
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ListingError {
    #[snafu(display("Failed to list directory {}", path.display()))]
    ReadDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read an entry of directory {}", path.display()))]
    ReadEntryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to walk the directory tree"))]
    WalkError { source: walkdir::Error },
    #[snafu(display("Failed to query metadata of {}", path.display()))]
    MetadataError {
        path: PathBuf,
        source: std::io::Error,
    },
}
