use std::path::Path;

/// How a file type spells a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    Block {
        start: &'static str,
        end: &'static str,
    },
    Line {
        prefix: &'static str,
    },
}

impl CommentStyle {
    const C_BLOCK: Self = Self::Block {
        start: "/*",
        end: "*/",
    };
    const MARKUP_BLOCK: Self = Self::Block {
        start: "<!--",
        end: "-->",
    };
    const HASH_LINE: Self = Self::Line { prefix: "#" };

    /// Style for a lower-cased or mixed-case extension, without the dot.
    pub fn for_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "ts" | "tsx" | "css" | "scss" | "json" => Some(Self::C_BLOCK),
            "html" | "md" => Some(Self::MARKUP_BLOCK),
            "py" | "sh" | "yml" | "yaml" => Some(Self::HASH_LINE),
            _ => None,
        }
    }

    pub fn for_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(Self::for_extension)
    }

    /// Renders `text` as a comment, framed by newlines so it can be appended
    /// to any file.
    pub fn render(&self, text: &str) -> String {
        match self {
            Self::Block { start, end } => {
                let body = text
                    .lines()
                    .map(|line| format!(" {line}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("\n{start}\n{body}\n{end}\n")
            }
            Self::Line { prefix } => {
                let body = text
                    .lines()
                    .map(|line| format!("{prefix} {line}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("\n{body}\n")
            }
        }
    }
}
