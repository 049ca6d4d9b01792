//! Directory listing and tree traversal shared by every tool.
//!
//! A [`DirectoryListing`] is a snapshot of one directory's immediate entries.
//! [`TreeWalker`] drives a pre-order traversal over listings, handing each one
//! to a visitor before descending into its subdirectories.

mod listing;
mod walker;

pub use listing::{DirectoryEntry, DirectoryListing, EntryKind, ListingError};
pub use walker::TreeWalker;
