use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the raw model text and its filename together so diagnostics can
/// point into the file.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a serde_json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_column_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an error for a reference that names no element.
    pub fn unresolved_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        let span = find_quoted_span(&self.src, &name);
        Box::new(Error::UnresolvedReference {
            src: self.named_source(),
            span,
            name,
            context: context.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the path passed with --model"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model file")]
    #[diagnostic(code(gosugen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse model file")]
    #[diagnostic(code(gosugen::json_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("unresolved {context} '{name}'")]
    #[diagnostic(
        code(gosugen::unresolved_reference),
        help("use the dot-separated path of an element, e.g. 'pkg.sub.ClassName'")
    )]
    UnresolvedReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("no element with this name")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },
}

/// Byte offset of a 1-based line/column position.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset <= src.len()).then_some(offset)
}

/// Span of the first `"name"` occurrence, excluding the quotes.
fn find_quoted_span(src: &str, name: &str) -> Option<SourceSpan> {
    let pattern = format!("\"{}\"", name);
    src.find(&pattern)
        .map(|pos| SourceSpan::from((pos + 1, name.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column_offset() {
        let src = "ab\ncd\nef";
        assert_eq!(line_column_offset(src, 1, 1), Some(0));
        assert_eq!(line_column_offset(src, 2, 2), Some(4));
        assert_eq!(line_column_offset(src, 3, 1), Some(6));
        assert_eq!(line_column_offset(src, 0, 1), None);
    }

    #[test]
    fn test_find_quoted_span() {
        let src = r#"source = "P.B""#;
        let span = find_quoted_span(src, "P.B").unwrap();
        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), 3);
        assert!(find_quoted_span(src, "P.C").is_none());
    }
}
