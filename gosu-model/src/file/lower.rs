//! Lowering of the raw file shape into a [`Model`] arena.

use indexmap::IndexMap;

use super::raw::{
    RawAttribute, RawElement, RawEnd, RawKind, RawModel, RawOperation, RawParameter,
    RawRelationship,
};
use crate::{
    Association, AssociationEnd, Attribute, Element, ElementId, ElementKind, Model, Operation,
    Parameter, Project, Relationship, TypeRef,
    error::{Result, SourceContext},
};

/// Build a model from its raw description.
///
/// Elements are created first so that type references and relationship
/// endpoints can point anywhere in the file.
pub(crate) fn lower(raw: RawModel, source: &SourceContext) -> Result<Model> {
    let mut model = Model::with_project(Project {
        name: raw.project.name,
        author: raw.project.author,
    });

    let mut pending = Vec::new();
    for element in &raw.elements {
        add_element(&mut model, None, element, &mut pending);
    }

    let resolver = Resolver::new(&model);
    let mut members = Vec::with_capacity(pending.len());
    for (id, element) in &pending {
        let attributes: Vec<Attribute> = element
            .attributes
            .iter()
            .map(|a| resolver.attribute(a))
            .collect();
        let operations: Vec<Operation> = element
            .operations
            .iter()
            .map(|o| resolver.operation(o))
            .collect();
        members.push((*id, attributes, operations));
    }

    let mut relationships = Vec::with_capacity(raw.relationships.len());
    for relationship in &raw.relationships {
        relationships.push(resolver.relationship(relationship, source)?);
    }

    for (id, attributes, operations) in members {
        for attribute in attributes {
            model.add_attribute(id, attribute);
        }
        for operation in operations {
            model.add_operation(id, operation);
        }
    }
    for relationship in relationships {
        model.relate(relationship);
    }

    Ok(model)
}

fn add_element<'r>(
    model: &mut Model,
    parent: Option<ElementId>,
    raw: &'r RawElement,
    pending: &mut Vec<(ElementId, &'r RawElement)>,
) {
    let kind = match raw.kind {
        RawKind::Package => ElementKind::package(),
        RawKind::Class => ElementKind::class(),
        RawKind::Interface => ElementKind::interface(),
        RawKind::Enumeration => ElementKind::enumeration(raw.literals.clone()),
        RawKind::AnnotationType => ElementKind::annotation_type(),
        RawKind::Other => ElementKind::Other,
    };
    let element = Element::new(&raw.name, kind)
        .doc(&raw.documentation)
        .visibility(raw.visibility.into())
        .modifiers(raw.modifiers.into());
    let id = model.add(parent, element);
    if let Some(stereotype) = &raw.stereotype {
        model.set_stereotype(id, stereotype);
    }
    pending.push((id, raw));

    for child in &raw.elements {
        add_element(model, Some(id), child, pending);
    }
}

/// Name lookup over a fully populated arena.
struct Resolver<'m> {
    model: &'m Model,
    by_simple_name: IndexMap<&'m str, Vec<ElementId>>,
}

impl<'m> Resolver<'m> {
    fn new(model: &'m Model) -> Self {
        let mut by_simple_name: IndexMap<&str, Vec<ElementId>> = IndexMap::new();
        for id in model.ids() {
            let element = model.element(id);
            if element.is_classifier() && !element.name.is_empty() {
                by_simple_name.entry(&element.name).or_default().push(id);
            }
        }
        Self {
            model,
            by_simple_name,
        }
    }

    /// Classifier by qualified path first, then by unique simple name.
    ///
    /// Packages never resolve, so a package sharing a type's name does not
    /// shadow it.
    fn lookup(&self, name: &str) -> Option<ElementId> {
        let qualified = self
            .model
            .find(name)
            .filter(|&id| self.model.element(id).is_classifier());
        if qualified.is_some() {
            return qualified;
        }
        match self.by_simple_name.get(name).map(Vec::as_slice) {
            Some([id]) => Some(*id),
            _ => None,
        }
    }

    fn type_ref(&self, ty: Option<&str>) -> TypeRef {
        match ty.map(str::trim) {
            None | Some("") => TypeRef::Unspecified,
            Some(name) => match self.lookup(name) {
                Some(id) => TypeRef::Element(id),
                None => TypeRef::Named(name.to_string()),
            },
        }
    }

    fn attribute(&self, raw: &RawAttribute) -> Attribute {
        Attribute {
            name: raw.name.clone(),
            documentation: raw.documentation.clone(),
            visibility: raw.visibility.into(),
            modifiers: raw.modifiers.into(),
            ty: self.type_ref(raw.ty.as_deref()),
            multiplicity: raw.multiplicity.clone(),
            is_ordered: raw.ordered,
            default_value: raw.default_value.clone(),
        }
    }

    fn operation(&self, raw: &RawOperation) -> Operation {
        Operation {
            name: raw.name.clone(),
            documentation: raw.documentation.clone(),
            visibility: raw.visibility.into(),
            modifiers: raw.modifiers.into(),
            parameters: raw.parameters.iter().map(|p| self.parameter(p)).collect(),
        }
    }

    fn parameter(&self, raw: &RawParameter) -> Parameter {
        Parameter {
            name: raw.name.clone(),
            documentation: raw.documentation.clone(),
            ty: self.type_ref(raw.ty.as_deref()),
            multiplicity: raw.multiplicity.clone(),
            is_ordered: raw.ordered,
            direction: raw.direction.into(),
        }
    }

    fn endpoint(&self, name: &str, context: &str, source: &SourceContext) -> Result<ElementId> {
        self.lookup(name)
            .ok_or_else(|| source.unresolved_error(name, context))
    }

    fn end(&self, raw: &RawEnd, source: &SourceContext) -> Result<AssociationEnd> {
        let reference = self.endpoint(&raw.reference, "association end", source)?;
        let feature = Attribute {
            name: raw.name.clone(),
            documentation: raw.documentation.clone(),
            visibility: raw.visibility.into(),
            modifiers: raw.modifiers.into(),
            ty: TypeRef::Element(reference),
            multiplicity: raw.multiplicity.clone(),
            is_ordered: raw.ordered,
            default_value: raw.default_value.clone(),
        };
        let end = AssociationEnd::new(reference).with_feature(feature);
        Ok(if raw.navigable { end.navigable() } else { end })
    }

    fn relationship(&self, raw: &RawRelationship, source: &SourceContext) -> Result<Relationship> {
        Ok(match raw {
            RawRelationship::Generalization {
                source: from,
                target,
            } => Relationship::Generalization {
                source: self.endpoint(from, "generalization source", source)?,
                target: self.endpoint(target, "generalization target", source)?,
            },
            RawRelationship::Realization {
                source: from,
                target,
            } => Relationship::InterfaceRealization {
                source: self.endpoint(from, "realization source", source)?,
                target: self.endpoint(target, "realization target", source)?,
            },
            RawRelationship::Association { end1, end2 } => Relationship::Association(Association {
                end1: self.end(end1, source)?,
                end2: self.end(end2, source)?,
            }),
        })
    }
}
