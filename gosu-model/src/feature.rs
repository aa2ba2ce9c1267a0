//! Structural and behavioral features: attributes, operations, parameters.

use crate::element::{ElementId, Modifiers, Visibility};

/// Reference to the type of a typed feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeRef {
    /// A classifier of the model.
    Element(ElementId),
    /// A primitive or external type spelled out by name.
    Named(String),
    #[default]
    Unspecified,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

/// A typed field of a classifier (also the shape of an association end).
#[derive(Debug, Clone, Default)]
pub struct Attribute {
    pub name: String,
    pub documentation: String,
    pub visibility: Visibility,
    pub modifiers: Modifiers,
    pub ty: TypeRef,
    /// Cardinality such as `1`, `0..*` or `3`.
    pub multiplicity: Option<String>,
    pub is_ordered: bool,
    pub default_value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = doc.into();
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn multiplicity(mut self, multiplicity: impl Into<String>) -> Self {
        self.multiplicity = Some(multiplicity.into());
        self
    }

    pub fn ordered(mut self) -> Self {
        self.is_ordered = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// Direction of an operation parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    In,
    Out,
    InOut,
    Return,
}

impl Direction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            "inout" => Some(Self::InOut),
            "return" => Some(Self::Return),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Parameter {
    pub name: String,
    pub documentation: String,
    pub ty: TypeRef,
    pub multiplicity: Option<String>,
    pub is_ordered: bool,
    pub direction: Direction,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            ..Self::default()
        }
    }

    /// A return parameter of the given type.
    pub fn returns(ty: TypeRef) -> Self {
        Self {
            ty,
            direction: Direction::Return,
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = doc.into();
        self
    }

    pub fn multiplicity(mut self, multiplicity: impl Into<String>) -> Self {
        self.multiplicity = Some(multiplicity.into());
        self
    }
}

/// A method of a classifier.
#[derive(Debug, Clone, Default)]
pub struct Operation {
    pub name: String,
    pub documentation: String,
    pub visibility: Visibility,
    pub modifiers: Modifiers,
    pub parameters: Vec<Parameter>,
}

impl Operation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = doc.into();
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Parameters in declaration order, excluding the return parameter.
    pub fn non_return_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.direction != Direction::Return)
    }

    /// The first parameter with [`Direction::Return`].
    pub fn return_parameter(&self) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| p.direction == Direction::Return)
    }
}
