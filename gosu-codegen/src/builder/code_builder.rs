//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Line buffer with an indentation depth.
///
/// # Example
///
/// ```
/// use gosugen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::gosu();
/// builder
///     .push_line("class A {")
///     .push_indent()
///     .push_line("var _x : int")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "class A {\n    var _x : int\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    unit: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            unit: indent.unit(),
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn gosu() -> Self {
        Self::new(Indent::GOSU)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `/** ... */` doc comment, one ` * ` line per entry.
    pub fn push_doc(&mut self, lines: &[String]) -> &mut Self {
        self.push_line("/**");
        for line in lines {
            self.push_line(format!(" * {}", line).trim_end());
        }
        self.push_line(" */")
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Doc(lines) => {
                self.push_doc(&lines);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.unit);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::gosu()
    }
}
