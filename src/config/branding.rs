//! Fixed texts written into generated and stamped files.

/// Name of the per-folder manifest written by the manifest generator.
pub const MANIFEST_FILE_NAME: &str = "info.txt";

/// Footer closing every manifest.
pub const MANIFEST_AUTHOR_FOOTER: &str = "Author: Dmitry Khorov
Telegram: @dkdevelop @jpegweb
DK Studio Production";

/// Banner appended to source files by the footer stamper, one comment line per line.
pub const SOURCE_BANNER: &str = "AtomGlide Front-end Client
Author: Dmitry Khorov
GitHub: DKhorov
Telegram: @dkdevelop @jpegweb
2025 Project";

/// Entry names the footer stamper never touches or descends into.
pub const IGNORED_NAMES: &[&str] = &["node_modules", ".git", "dist", "build"];
