use std::path::PathBuf;

use snafu::ResultExt;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::filesystem::listing::WalkSnafu;
use crate::filesystem::{DirectoryListing, ListingError};

/// Pre-order walk over a directory tree.
///
/// Siblings are visited in name order. Directory symlinks are listed but
/// never descended into.
#[derive(Debug, Clone)]
pub struct TreeWalker<'a> {
    root: PathBuf,
    ignored: &'a [&'a str],
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignored: &[],
        }
    }

    /// Drops entries with any of these names from every listing, before the
    /// visitor sees it and before descending.
    pub fn ignoring(mut self, names: &'a [&'a str]) -> Self {
        self.ignored = names;
        self
    }

    /// Visits every directory of the tree, root first. Stops at the first
    /// error, whether from listing or from `visit`. Returns the number of
    /// directories visited.
    pub fn walk<E, F>(&self, mut visit: F) -> Result<usize, E>
    where
        F: FnMut(&DirectoryListing) -> Result<(), E>,
        E: From<ListingError>,
    {
        let mut visited = 0;

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_ignored(entry));

        for entry in walker {
            let entry = entry.context(WalkSnafu)?;
            // The root is always listed, so a root that is not a directory fails
            if entry.depth() > 0 && !entry.file_type().is_dir() {
                continue;
            }

            debug!("Visiting {}", entry.path().display());
            let mut listing = DirectoryListing::read(entry.path())?;
            listing.retain(|entry| {
                let ignored = self.ignored.iter().any(|name| entry.name() == *name);
                if ignored {
                    debug!("Ignoring {} {}", entry.kind(), entry.path().display());
                }
                !ignored
            });

            visit(&listing)?;
            visited += 1;
        }

        Ok(visited)
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        self.ignored
            .iter()
            .any(|name| entry.file_name() == *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[fixture]
    fn nested_tree() -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/deep")).expect("Failed to create a/deep");
        fs::create_dir_all(root.join("b")).expect("Failed to create b");
        fs::create_dir_all(root.join("node_modules/pkg")).expect("Failed to create node_modules");
        fs::write(root.join("a/file.txt"), "x").expect("Failed to write file");
        temp_dir
    }

    fn relative_paths(root: &Path, walker: &TreeWalker) -> Vec<String> {
        let mut seen = Vec::new();
        walker
            .walk(|listing| {
                let relative = listing.path().strip_prefix(root).expect("Outside of root");
                seen.push(relative.display().to_string());
                Ok::<_, ListingError>(())
            })
            .expect("Walk failed");
        seen
    }

    #[rstest]
    fn test_walk_is_preorder_in_name_order(nested_tree: TempDir) {
        let root = nested_tree.path();
        let walker = TreeWalker::new(root);

        let seen = relative_paths(root, &walker);

        assert_eq!(seen, vec!["", "a", "a/deep", "b", "node_modules", "node_modules/pkg"]);
    }

    #[rstest]
    fn test_walk_skips_ignored_names(nested_tree: TempDir) {
        let root = nested_tree.path();
        let walker = TreeWalker::new(root).ignoring(&["node_modules"]);

        let seen = relative_paths(root, &walker);

        assert_eq!(seen, vec!["", "a", "a/deep", "b"]);
    }

    #[rstest]
    fn test_walk_counts_visited_directories(nested_tree: TempDir) {
        let walker = TreeWalker::new(nested_tree.path());

        let visited = walker.walk(|_| Ok::<_, ListingError>(())).expect("Walk failed");

        assert_eq!(visited, 6);
    }

    #[rstest]
    fn test_walk_stops_on_visitor_error(nested_tree: TempDir) {
        let walker = TreeWalker::new(nested_tree.path());
        let mut calls = 0;

        let result = walker.walk(|listing| {
            calls += 1;
            DirectoryListing::read(listing.path().join("missing")).map(|_| ())
        });

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_walk_missing_root() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let walker = TreeWalker::new(temp_dir.path().join("missing"));

        let result = walker.walk(|_| Ok::<_, ListingError>(()));

        assert!(matches!(result, Err(ListingError::WalkError { .. })));
    }

    #[test]
    fn test_walk_file_root_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "x").expect("Failed to write file");

        let result = TreeWalker::new(&file).walk(|_| Ok::<_, ListingError>(()));

        assert!(matches!(result, Err(ListingError::ReadDirError { .. })));
    }

    #[test]
    fn test_walk_does_not_ignore_the_root_itself() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().join("build");
        fs::create_dir_all(root.join("build")).expect("Failed to create build/build");

        let visited = TreeWalker::new(&root)
            .ignoring(&["build"])
            .walk(|listing| {
                assert!(listing.entries().is_empty());
                Ok::<_, ListingError>(())
            })
            .expect("Walk failed");

        assert_eq!(visited, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_follow_symlink_cycles() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        fs::create_dir(root.join("loop")).expect("Failed to create loop");
        std::os::unix::fs::symlink(root, root.join("loop/back")).expect("Failed to link");

        let visited = TreeWalker::new(root)
            .walk(|_| Ok::<_, ListingError>(()))
            .expect("Walk failed");

        assert_eq!(visited, 2);
    }
}
