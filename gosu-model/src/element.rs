//! Model elements and their kinds.

use crate::feature::{Attribute, Operation};

/// Index of an element inside a [`Model`](crate::Model) arena.
///
/// Ids are only meaningful for the model that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

/// Declared visibility of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// Package-default visibility; emits no keyword.
    #[default]
    Package,
}

impl Visibility {
    /// Parse the model-file spelling of a visibility.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "private" => Some(Self::Private),
            "package" => Some(Self::Package),
            _ => None,
        }
    }
}

/// Boolean flags shared by elements, attributes and operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_leaf: bool,
    pub is_final_specialization: bool,
    pub is_read_only: bool,
}

impl Modifiers {
    pub fn abstract_() -> Self {
        Self {
            is_abstract: true,
            ..Self::default()
        }
    }

    pub fn static_() -> Self {
        Self {
            is_static: true,
            ..Self::default()
        }
    }

    /// True when the element may not be specialized further.
    pub fn is_final(&self) -> bool {
        self.is_leaf || self.is_final_specialization
    }
}

/// A named node of the design model.
#[derive(Debug, Clone)]
pub struct Element {
    pub name: String,
    /// Non-owning link to the enclosing element.
    pub parent: Option<ElementId>,
    pub documentation: String,
    pub visibility: Visibility,
    pub modifiers: Modifiers,
    pub kind: ElementKind,
}

impl Element {
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            parent: None,
            documentation: String::new(),
            visibility: Visibility::default(),
            modifiers: Modifiers::default(),
            kind,
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

    /// Elements owned by this one, in model order.
    pub fn owned_elements(&self) -> &[ElementId] {
        match &self.kind {
            ElementKind::Package(pkg) => &pkg.owned_elements,
            ElementKind::Class(c) | ElementKind::Interface(c) | ElementKind::AnnotationType(c) => {
                &c.owned_elements
            }
            ElementKind::Enumeration(e) => &e.owned_elements,
            ElementKind::Other => &[],
        }
    }

    pub(crate) fn owned_elements_mut(&mut self) -> Option<&mut Vec<ElementId>> {
        match &mut self.kind {
            ElementKind::Package(pkg) => Some(&mut pkg.owned_elements),
            ElementKind::Class(c) | ElementKind::Interface(c) | ElementKind::AnnotationType(c) => {
                Some(&mut c.owned_elements)
            }
            ElementKind::Enumeration(e) => Some(&mut e.owned_elements),
            ElementKind::Other => None,
        }
    }

    /// Attributes, operations and stereotype for class-like elements.
    pub fn classifier(&self) -> Option<&Classifier> {
        match &self.kind {
            ElementKind::Class(c) | ElementKind::Interface(c) | ElementKind::AnnotationType(c) => {
                Some(c)
            }
            _ => None,
        }
    }

    pub(crate) fn classifier_mut(&mut self) -> Option<&mut Classifier> {
        match &mut self.kind {
            ElementKind::Class(c) | ElementKind::Interface(c) | ElementKind::AnnotationType(c) => {
                Some(c)
            }
            _ => None,
        }
    }

    /// Operations of the element, empty for non-classifiers.
    pub fn operations(&self) -> &[Operation] {
        self.classifier().map_or(&[], |c| c.operations.as_slice())
    }

    /// Attributes of the element, empty for non-classifiers.
    pub fn attributes(&self) -> &[Attribute] {
        self.classifier().map_or(&[], |c| c.attributes.as_slice())
    }

    /// Stereotype tag, if any.
    pub fn stereotype(&self) -> Option<&str> {
        self.classifier().and_then(|c| c.stereotype.as_deref())
    }

    /// True for classes, interfaces, enumerations and annotation types.
    pub fn is_classifier(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Class(_)
                | ElementKind::Interface(_)
                | ElementKind::Enumeration(_)
                | ElementKind::AnnotationType(_)
        )
    }
}

/// Closed set of element kinds the generator understands.
#[derive(Debug, Clone)]
pub enum ElementKind {
    Package(Package),
    Class(Classifier),
    Interface(Classifier),
    Enumeration(Enumeration),
    AnnotationType(Classifier),
    /// Anything else the host model may contain; never emitted.
    Other,
}

impl ElementKind {
    pub fn package() -> Self {
        Self::Package(Package::default())
    }

    pub fn class() -> Self {
        Self::Class(Classifier::default())
    }

    pub fn interface() -> Self {
        Self::Interface(Classifier::default())
    }

    pub fn enumeration(literals: Vec<String>) -> Self {
        Self::Enumeration(Enumeration {
            literals,
            owned_elements: Vec::new(),
        })
    }

    pub fn annotation_type() -> Self {
        Self::AnnotationType(Classifier::default())
    }

    /// Human-readable kind name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package(_) => "package",
            Self::Class(_) => "class",
            Self::Interface(_) => "interface",
            Self::Enumeration(_) => "enumeration",
            Self::AnnotationType(_) => "annotationType",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Package {
    pub owned_elements: Vec<ElementId>,
}

/// Body shared by classes, interfaces and annotation types.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    pub attributes: Vec<Attribute>,
    pub operations: Vec<Operation>,
    pub owned_elements: Vec<ElementId>,
    /// Selects alternate emission, e.g. `annotationType` or `Enhancement`.
    pub stereotype: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    pub literals: Vec<String>,
    pub owned_elements: Vec<ElementId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_parse() {
        assert_eq!(Visibility::parse("public"), Some(Visibility::Public));
        assert_eq!(Visibility::parse("package"), Some(Visibility::Package));
        assert_eq!(Visibility::parse("friend"), None);
        assert_eq!(Visibility::default(), Visibility::Package);
    }

    #[test]
    fn test_modifiers_is_final() {
        assert!(!Modifiers::default().is_final());
        let leaf = Modifiers {
            is_leaf: true,
            ..Modifiers::default()
        };
        let final_spec = Modifiers {
            is_final_specialization: true,
            ..Modifiers::default()
        };
        assert!(leaf.is_final());
        assert!(final_spec.is_final());
    }

    #[test]
    fn test_non_classifier_has_no_members() {
        let pkg = Element::new("p", ElementKind::package());
        assert!(pkg.operations().is_empty());
        assert!(pkg.attributes().is_empty());
        assert!(pkg.stereotype().is_none());
        assert!(!pkg.is_classifier());
    }
}
