//! Gosu member variable declaration.

use crate::builder::{CodeFragment, Renderable};

/// `as [readonly] Name` property alias on a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub readonly: bool,
}

/// A `var` declaration.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: String,
    doc: Option<String>,
    modifiers: Vec<String>,
    property: Option<Property>,
    default_value: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            modifiers: Vec::new(),
            property: None,
            default_value: None,
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

    pub fn property(mut self, property: Option<Property>) -> Self {
        self.property = property;
        self
    }

    /// Initializer; empty values are ignored.
    pub fn default_value(mut self, value: Option<&str>) -> Self {
        self.default_value = value.filter(|v| !v.is_empty()).map(str::to_string);
        self
    }

    fn declaration(&self) -> String {
        let mut terms: Vec<&str> = self.modifiers.iter().map(String::as_str).collect();
        terms.extend(["var", self.name.as_str(), ":", self.ty.as_str()]);
        if let Some(property) = &self.property {
            terms.push("as");
            if property.readonly {
                terms.push("readonly");
            }
            terms.push(property.name.as_str());
        }
        let mut line = terms.join(" ");
        if let Some(value) = &self.default_value {
            line.push_str(" = ");
            line.push_str(value);
        }
        line
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let doc = self.doc.as_deref().and_then(CodeFragment::doc);
        doc.into_iter()
            .chain([CodeFragment::Line(self.declaration())])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn render(field: &Field) -> String {
        let mut builder = CodeBuilder::gosu();
        builder.emit(field);
        builder.build()
    }

    #[test]
    fn test_plain_field() {
        let field = Field::new("_count", "int");
        assert_eq!(render(&field), "var _count : int\n");
    }

    #[test]
    fn test_field_with_everything() {
        let field = Field::new("_name", "String")
            .doc("The name")
            .modifiers(vec!["private".into(), "static".into()])
            .property(Some(Property {
                name: "Name".into(),
                readonly: true,
            }))
            .default_value(Some("\"x\""));
        assert_eq!(
            render(&field),
            "/**\n * The name\n */\nprivate static var _name : String as readonly Name = \"x\"\n"
        );
    }

    #[test]
    fn test_empty_default_is_ignored() {
        let field = Field::new("_a", "int").default_value(Some(""));
        assert_eq!(render(&field), "var _a : int\n");
    }
}
