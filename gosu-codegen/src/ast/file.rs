//! SourceFile abstraction for a complete `.gs` / `.gsx` file.

use crate::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A Gosu `uses` statement.
#[derive(Debug, Clone)]
pub struct Uses {
    target: String,
}

impl Uses {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// `uses java.util.*;`, imported by every non-enum file.
    pub fn java_util() -> Self {
        Self::new("java.util.*")
    }
}

impl Renderable for Uses {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!("uses {};", self.target))]
    }
}

/// A structured representation of a Gosu source file.
///
/// Layout: optional `package` line and blank, `uses` lines and blank, body.
#[derive(Debug, Default)]
pub struct SourceFile {
    package: Option<String>,
    uses: Vec<Uses>,
    body: Vec<Vec<CodeFragment>>,
}

impl SourceFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dotted package path. An empty path emits no package line.
    pub fn package(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.package = (!path.is_empty()).then_some(path);
        self
    }

    pub fn uses(mut self, uses: Uses) -> Self {
        self.uses.push(uses);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: &R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with the given indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        if let Some(package) = &self.package {
            builder.push_line(&format!("package {}", package));
            builder.push_blank();
        }

        if !self.uses.is_empty() {
            for uses in &self.uses {
                builder.emit(uses);
            }
            builder.push_blank();
        }

        for fragments in &self.body {
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Render the file with Gosu indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::GOSU)
    }
}
