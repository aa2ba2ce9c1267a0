//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Declaration nodes describe themselves as fragments; the
//! [`CodeBuilder`](super::CodeBuilder) turns fragments into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A `/** ... */` doc comment, one entry per line.
    Doc(Vec<String>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some("}".to_string()),
        }
    }

    /// Create a doc comment fragment from multi-line text.
    ///
    /// Returns `None` when the trimmed text is empty.
    pub fn doc(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self::Doc(text.lines().map(str::to_string).collect()))
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
