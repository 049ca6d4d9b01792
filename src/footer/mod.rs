//! Appends the attribution banner to source files.

mod comment_style;
mod stamper;

pub use comment_style::CommentStyle;
pub use stamper::{FooterError, FooterTally, stamp_file, stamp_footers};
