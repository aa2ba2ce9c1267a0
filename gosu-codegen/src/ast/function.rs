//! Gosu function and constructor declarations.

use crate::builder::{CodeFragment, Renderable};

/// A parameter in a Gosu function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A `function` declaration, either signature-only or with a body.
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    doc: Option<String>,
    modifiers: Vec<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Option<Vec<String>>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            modifiers: Vec::new(),
            params: Vec::new(),
            return_type: None,
            body: None,
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

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the body, turning a signature into a definition.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.get_or_insert_with(Vec::new).push(line.into());
        self
    }

    fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{}:{}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        let mut terms = self.modifiers.clone();
        terms.push("function".to_string());
        terms.push(format!("{}({})", self.name, params));
        if let Some(ret) = &self.return_type {
            terms.push(":".to_string());
            terms.push(ret.clone());
        }
        terms.join(" ")
    }
}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .doc
            .as_deref()
            .and_then(CodeFragment::doc)
            .into_iter()
            .collect();

        let signature = self.signature();
        match &self.body {
            None => fragments.push(CodeFragment::Line(signature)),
            Some(lines) => fragments.push(CodeFragment::braced(
                format!("{} {{", signature),
                lines.iter().map(|l| CodeFragment::line(l.as_str())).collect(),
            )),
        }
        fragments
    }
}

/// A no-argument `construct()` declaration with an empty body.
#[derive(Debug, Clone, Default)]
pub struct Constructor {
    doc: Option<String>,
    visibility: Option<String>,
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn visibility(mut self, visibility: Option<&str>) -> Self {
        self.visibility = visibility.map(str::to_string);
        self
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = match &self.visibility {
            Some(vis) => format!("{} construct() {{", vis),
            None => "construct() {".to_string(),
        };
        self.doc
            .as_deref()
            .and_then(CodeFragment::doc)
            .into_iter()
            .chain([CodeFragment::braced(header, Vec::new())])
            .collect()
    }
}
