mod branding;

pub use branding::{IGNORED_NAMES, MANIFEST_AUTHOR_FOOTER, MANIFEST_FILE_NAME, SOURCE_BANNER};
