use std::path::Path;

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::counter::Tally;
use crate::filesystem::{ListingError, TreeWalker};

/// Counts every file and folder below `root`.
///
/// Anything that does not resolve to a directory counts as a file, including
/// dangling symlinks. Directory symlinks count as folders but are not entered.
pub fn count(root: &Path) -> Result<Tally, CountError> {
    let mut tally = Tally::default();

    TreeWalker::new(root).walk(|listing| {
        let folders = listing.directories().count() as u64;
        let files = listing.entries().len() as u64 - folders;
        debug!(
            "{}: {files} files, {folders} folders",
            listing.path().display()
        );

        tally += Tally::new(files, folders);
        Ok::<_, ListingError>(())
    })
    .context(ListingSnafu)?;

    Ok(tally)
}

#[derive(Debug, Snafu)]
pub enum CountError {
    #[snafu(display("Failed to walk the directory tree"))]
    ListingError { source: ListingError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::fs;
    use tempfile::TempDir;

    fn build_tree(root: &Path, dirs: &[&str], files: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).expect("Failed to create dir");
        }
        for file in files {
            fs::write(root.join(file), "content").expect("Failed to write file");
        }
    }

    #[rstest]
    #[case::empty(&[], &[], Tally::new(0, 0))]
    #[case::one_empty_subdir(&["sub"], &[], Tally::new(0, 1))]
    #[case::flat(&[], &["a.txt", "b.txt"], Tally::new(2, 0))]
    #[case::nested(
        &["src/app", "src/lib", "docs"],
        &["README.md", "src/main.rs", "src/app/mod.rs", "src/lib/a.rs", "src/lib/b.rs"],
        Tally::new(5, 4)
    )]
    fn test_count_tree(#[case] dirs: &[&str], #[case] files: &[&str], #[case] expected: Tally) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        build_tree(temp_dir.path(), dirs, files);

        let tally = count(temp_dir.path()).expect("Failed to count");

        assert_eq!(tally, expected);
    }

    #[test]
    fn test_count_includes_existing_manifests() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        build_tree(temp_dir.path(), &["sub"], &["info.txt", "sub/info.txt"]);

        let tally = count(temp_dir.path()).expect("Failed to count");

        assert_eq!(tally, Tally::new(2, 1));
    }

    #[cfg(unix)]
    #[test]
    fn test_count_directory_symlink_is_a_folder_not_entered() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        build_tree(root, &["real"], &["real/a.txt"]);
        std::os::unix::fs::symlink(root.join("real"), root.join("alias")).expect("Failed to link");

        let tally = count(root).expect("Failed to count");

        assert_eq!(tally, Tally::new(1, 2));
    }

    #[test]
    fn test_count_missing_root_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let result = count(&temp_dir.path().join("missing"));

        match result.unwrap_err() {
            CountError::ListingError { source } => {
                assert!(matches!(source, ListingError::WalkError { .. }));
            }
        }
    }
}
