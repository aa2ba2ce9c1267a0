//! Type declarations: classes, enhancements, interfaces, annotations and enums.

use crate::builder::{CodeFragment, Renderable};

/// A braced type declaration whose members are separated by blank lines.
///
/// Renders as the header line, a blank line, then every member followed by
/// a blank line, and finally the closing brace.
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    keyword: String,
    name: String,
    doc: Option<String>,
    modifiers: Vec<String>,
    clauses: Vec<String>,
    members: Vec<Vec<CodeFragment>>,
}

impl TypeDeclaration {
    /// Create a declaration such as `class Name` or `annotation Name`.
    pub fn new(keyword: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            doc: None,
            modifiers: Vec::new(),
            clauses: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn modifiers(mut self, modifiers: Vec<String>) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Append a header clause after the name, e.g. `extends Base`.
    pub fn clause(mut self, clause: impl Into<String>) -> Self {
        self.clauses.push(clause.into());
        self
    }

    /// Add a member (any Renderable).
    pub fn member<R: Renderable>(mut self, node: &R) -> Self {
        self.members.push(node.to_fragments());
        self
    }

    fn header(&self) -> String {
        let mut terms = self.modifiers.clone();
        terms.push(self.keyword.clone());
        terms.push(self.name.clone());
        terms.extend(self.clauses.iter().cloned());
        format!("{} {{", terms.join(" "))
    }
}

impl Renderable for TypeDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = vec![CodeFragment::Blank];
        for member in &self.members {
            body.push(CodeFragment::Sequence(member.clone()));
            body.push(CodeFragment::Blank);
        }

        let mut fragments: Vec<CodeFragment> = self
            .doc
            .as_deref()
            .and_then(CodeFragment::doc)
            .into_iter()
            .collect();
        fragments.push(CodeFragment::braced(self.header(), body));
        fragments
    }
}

/// An `enum` with comma-separated literals.
#[derive(Debug, Clone)]
pub struct EnumDeclaration {
    name: String,
    doc: Option<String>,
    literals: Vec<String>,
}

impl EnumDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            literals: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn literals(mut self, literals: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.literals.extend(literals.into_iter().map(Into::into));
        self
    }
}

impl Renderable for EnumDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let last = self.literals.len().saturating_sub(1);
        let body = self
            .literals
            .iter()
            .enumerate()
            .map(|(i, literal)| {
                if i < last {
                    CodeFragment::Line(format!("{},", literal))
                } else {
                    CodeFragment::line(literal.as_str())
                }
            })
            .collect();

        let mut fragments: Vec<CodeFragment> = self
            .doc
            .as_deref()
            .and_then(CodeFragment::doc)
            .into_iter()
            .collect();
        fragments.push(CodeFragment::braced(format!("enum {} {{", self.name), body));
        fragments
    }
}
