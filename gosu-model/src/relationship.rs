//! Relationships between classifiers.

use crate::{
    element::ElementId,
    feature::{Attribute, TypeRef},
};

/// One end of an [`Association`].
#[derive(Debug, Clone)]
pub struct AssociationEnd {
    /// Classifier this end attaches to.
    pub reference: ElementId,
    pub navigable: bool,
    /// Name, documentation, visibility and cardinality of the end.
    pub feature: Attribute,
}

impl AssociationEnd {
    pub fn new(reference: ElementId) -> Self {
        Self {
            reference,
            navigable: false,
            feature: Attribute::new("", TypeRef::Element(reference)),
        }
    }

    pub fn navigable(mut self) -> Self {
        self.navigable = true;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.feature.name = name.into();
        self
    }

    pub fn multiplicity(mut self, multiplicity: impl Into<String>) -> Self {
        self.feature.multiplicity = Some(multiplicity.into());
        self
    }

    pub fn ordered(mut self) -> Self {
        self.feature.is_ordered = true;
        self
    }

    /// Replace the attribute-shaped part, keeping the type bound to the reference.
    pub fn with_feature(mut self, feature: Attribute) -> Self {
        self.feature = Attribute {
            ty: TypeRef::Element(self.reference),
            ..feature
        };
        self
    }
}

#[derive(Debug, Clone)]
pub struct Association {
    pub end1: AssociationEnd,
    pub end2: AssociationEnd,
}

/// A directed or undirected link between elements.
#[derive(Debug, Clone)]
pub enum Relationship {
    /// `source` extends `target`.
    Generalization { source: ElementId, target: ElementId },
    /// `source` implements `target`.
    InterfaceRealization { source: ElementId, target: ElementId },
    Association(Association),
}

impl Relationship {
    /// True when `id` participates in the relationship at either end.
    pub fn involves(&self, id: ElementId) -> bool {
        match self {
            Self::Generalization { source, target }
            | Self::InterfaceRealization { source, target } => *source == id || *target == id,
            Self::Association(a) => a.end1.reference == id || a.end2.reference == id,
        }
    }

    pub fn is_generalization_from(&self, id: ElementId) -> bool {
        matches!(self, Self::Generalization { source, .. } if *source == id)
    }

    pub fn is_realization_from(&self, id: ElementId) -> bool {
        matches!(self, Self::InterfaceRealization { source, .. } if *source == id)
    }

    pub fn is_association(&self) -> bool {
        matches!(self, Self::Association(_))
    }

    /// Target of a generalization or realization.
    pub fn target(&self) -> Option<ElementId> {
        match self {
            Self::Generalization { target, .. } | Self::InterfaceRealization { target, .. } => {
                Some(*target)
            }
            Self::Association(_) => None,
        }
    }
}
