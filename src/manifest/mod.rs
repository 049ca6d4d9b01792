//! Per-folder `info.txt` manifests.

mod document;
mod generator;

pub use document::{FileLine, Manifest};
pub use generator::{ManifestError, write_manifest, write_manifests};
