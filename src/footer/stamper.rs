use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use derive_more::{Add, AddAssign};
use snafu::{ResultExt, Snafu};
use tracing::{debug, error, info};

use crate::config::{IGNORED_NAMES, SOURCE_BANNER};
use crate::filesystem::{ListingError, TreeWalker};
use crate::footer::CommentStyle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Add, AddAssign)]
pub struct FooterTally {
    pub added: u64,
    pub skipped: u64,
}

/// Appends the banner to one file. Returns `Ok(false)` when the file type has
/// no known comment style.
pub fn stamp_file(path: &Path) -> std::io::Result<bool> {
    let Some(style) = CommentStyle::for_path(path) else {
        return Ok(false);
    };

    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(style.render(SOURCE_BANNER).as_bytes())?;
    Ok(true)
}

/// Stamps every eligible file below `root`, skipping ignored folders and
/// files entirely. A file that cannot be written is logged and counted as
/// skipped; a directory that cannot be listed aborts the run.
pub fn stamp_footers(root: &Path) -> Result<FooterTally, FooterError> {
    let mut tally = FooterTally::default();

    TreeWalker::new(root)
        .ignoring(IGNORED_NAMES)
        .walk(|listing| {
            for entry in listing.entries().iter().filter(|e| !e.is_directory()) {
                match stamp_file(entry.path()) {
                    Ok(true) => {
                        info!("Stamped {}", entry.path().display());
                        tally.added += 1;
                    }
                    Ok(false) => {
                        debug!("No comment style for {}", entry.path().display());
                        tally.skipped += 1;
                    }
                    Err(e) => {
                        error!("Failed to write {}: {e}", entry.path().display());
                        tally.skipped += 1;
                    }
                }
            }
            Ok::<_, ListingError>(())
        })
        .context(ListingSnafu)?;

    Ok(tally)
}

#[derive(Debug, Snafu)]
pub enum FooterError {
    #[snafu(display("Failed to walk the directory tree"))]
    ListingError { source: ListingError },
}
