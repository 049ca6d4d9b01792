use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::info;

use crate::config::MANIFEST_FILE_NAME;
use crate::ext::PathExt;
use crate::filesystem::{DirectoryListing, ListingError, TreeWalker};
use crate::manifest::{FileLine, Manifest};

/// Builds the manifest for a listed folder. The manifest file itself is
/// never part of its own listing.
fn build_manifest(listing: &DirectoryListing) -> Result<Manifest, ManifestError> {
    let files = listing
        .files()
        .filter(|entry| entry.name().as_os_str() != MANIFEST_FILE_NAME)
        .map(|entry| {
            let size_bytes = entry.size().context(SizeSnafu)?;
            Ok(FileLine::new(entry.display_name(), size_bytes))
        })
        .collect::<Result<Vec<_>, ManifestError>>()?;

    Ok(Manifest::new(listing.path().display_name(), files))
}

/// (Re)writes `info.txt` for an already listed folder, replacing any previous content.
pub fn write_manifest(listing: &DirectoryListing) -> Result<PathBuf, ManifestError> {
    let manifest = build_manifest(listing)?;
    let manifest_path = listing.path().join(MANIFEST_FILE_NAME);

    fs::write(&manifest_path, manifest.to_string()).context(WriteSnafu {
        path: &manifest_path,
    })?;
    info!(
        "Wrote {} ({} files)",
        manifest_path.display(),
        manifest.files.len()
    );

    Ok(manifest_path)
}

/// Writes a manifest into `root` and every directory below it, parents before
/// children. The first failure aborts the walk; manifests written until then
/// are kept. Returns the number of manifests written.
pub fn write_manifests(root: &Path) -> Result<usize, ManifestError> {
    TreeWalker::new(root).walk(|listing| write_manifest(listing).map(|_| ()))
}

#[derive(Debug, Snafu)]
pub enum ManifestError {
    #[snafu(display("Failed to walk the directory tree"), context(false))]
    ListingError { source: ListingError },
    #[snafu(display("Failed to determine a file size"))]
    SizeError { source: ListingError },
    #[snafu(display("Failed to write manifest {}", path.display()))]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}
