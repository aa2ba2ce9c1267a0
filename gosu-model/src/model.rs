//! In-memory model arena.

use crate::{
    Repository,
    element::{Element, ElementId, ElementKind},
    feature::{Attribute, Operation},
    relationship::Relationship,
};

/// Project-level metadata.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub name: String,
    pub author: Option<String>,
}

/// A design model: an arena of elements plus the relationships between them.
///
/// Elements are never removed, so every [`ElementId`] handed out stays valid.
#[derive(Debug, Clone, Default)]
pub struct Model {
    elements: Vec<Element>,
    relationships: Vec<Relationship>,
    roots: Vec<ElementId>,
    project: Project,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(project: Project) -> Self {
        Self {
            project,
            ..Self::default()
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn project_mut(&mut self) -> &mut Project {
        &mut self.project
    }

    /// Add an element under `parent` (or at the top level) and return its id.
    ///
    /// Children are kept in insertion order. A parent that cannot own
    /// elements leaves the new element detached from any owner list.
    pub fn add(&mut self, parent: Option<ElementId>, mut element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        element.parent = parent;
        self.elements.push(element);
        match parent {
            Some(p) => {
                if let Some(owned) = self.elements[p.0].owned_elements_mut() {
                    owned.push(id);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    pub fn add_package(&mut self, parent: Option<ElementId>, name: &str) -> ElementId {
        self.add(parent, Element::new(name, ElementKind::package()))
    }

    pub fn add_class(&mut self, parent: Option<ElementId>, name: &str) -> ElementId {
        self.add(parent, Element::new(name, ElementKind::class()))
    }

    pub fn add_interface(&mut self, parent: Option<ElementId>, name: &str) -> ElementId {
        self.add(parent, Element::new(name, ElementKind::interface()))
    }

    pub fn add_enumeration(
        &mut self,
        parent: Option<ElementId>,
        name: &str,
        literals: &[&str],
    ) -> ElementId {
        let literals = literals.iter().map(|l| l.to_string()).collect();
        self.add(parent, Element::new(name, ElementKind::enumeration(literals)))
    }

    pub fn add_annotation_type(&mut self, parent: Option<ElementId>, name: &str) -> ElementId {
        self.add(parent, Element::new(name, ElementKind::annotation_type()))
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// Append an attribute to a classifier. Ignored for other kinds.
    pub fn add_attribute(&mut self, owner: ElementId, attribute: Attribute) {
        if let Some(c) = self.elements[owner.0].classifier_mut() {
            c.attributes.push(attribute);
        }
    }

    /// Append an operation to a classifier. Ignored for other kinds.
    pub fn add_operation(&mut self, owner: ElementId, operation: Operation) {
        if let Some(c) = self.elements[owner.0].classifier_mut() {
            c.operations.push(operation);
        }
    }

    /// Set the stereotype of a classifier. Ignored for other kinds.
    pub fn set_stereotype(&mut self, owner: ElementId, stereotype: &str) {
        if let Some(c) = self.elements[owner.0].classifier_mut() {
            c.stereotype = Some(stereotype.to_string());
        }
    }

    pub fn relate(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    /// Record that `source` extends `target`.
    pub fn generalize(&mut self, source: ElementId, target: ElementId) {
        self.relate(Relationship::Generalization { source, target });
    }

    /// Record that `source` implements `target`.
    pub fn realize(&mut self, source: ElementId, target: ElementId) {
        self.relate(Relationship::InterfaceRealization { source, target });
    }

    /// Top-level elements in model order.
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// All element ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        (0..self.elements.len()).map(ElementId)
    }

    /// Dot-separated names from the top level down to `id`.
    pub fn qualified_name(&self, id: ElementId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            let element = self.element(cur);
            names.push(element.name.as_str());
            current = element.parent;
        }
        names.reverse();
        names.join(".")
    }

    /// Find an element by its dot-separated qualified name.
    pub fn find(&self, qualified: &str) -> Option<ElementId> {
        let mut candidates = self.roots.as_slice();
        let mut found = None;
        for segment in qualified.split('.') {
            let id = candidates
                .iter()
                .copied()
                .find(|id| self.element(*id).name == segment)?;
            candidates = self.element(id).owned_elements();
            found = Some(id);
        }
        found
    }

    /// Packages in depth-first model order.
    pub fn packages(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let element = self.element(id);
            if matches!(element.kind, ElementKind::Package(_)) {
                out.push(id);
            }
            stack.extend(element.owned_elements().iter().rev().copied());
        }
        out
    }
}

impl Repository for Model {
    fn element(&self, id: ElementId) -> &Element {
        Model::element(self, id)
    }

    fn relationships_of(
        &self,
        id: ElementId,
        predicate: &dyn Fn(&Relationship) -> bool,
    ) -> Vec<&Relationship> {
        self.relationships
            .iter()
            .filter(|r| r.involves(id) && predicate(r))
            .collect()
    }

    fn project_author(&self) -> Option<&str> {
        self.project.author.as_deref().filter(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relationship::{Association, AssociationEnd};

    fn sample() -> (Model, ElementId, ElementId, ElementId) {
        let mut model = Model::new();
        let root = model.add_package(None, "com");
        let inner = model.add_package(Some(root), "acme");
        let class = model.add_class(Some(inner), "Widget");
        (model, root, inner, class)
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut model = Model::new();
        let pkg = model.add_package(None, "p");
        let b = model.add_class(Some(pkg), "B");
        let a = model.add_class(Some(pkg), "A");
        assert_eq!(model.element(pkg).owned_elements(), [b, a]);
        assert_eq!(model.element(a).parent, Some(pkg));
        assert_eq!(model.roots(), [pkg]);
    }

    #[test]
    fn test_path_to_stops_at_base() {
        let (model, root, inner, class) = sample();
        assert_eq!(model.path_to(class, root), vec![root, inner, class]);
        assert_eq!(model.path_to(class, inner), vec![inner, class]);
        assert_eq!(model.path_to(inner, inner), vec![inner]);
    }

    #[test]
    fn test_path_to_unrelated_base_is_empty() {
        let (mut model, root, _, _) = sample();
        let other = model.add_package(None, "org");
        assert!(model.path_to(root, other).is_empty());
    }

    #[test]
    fn test_qualified_name_and_find() {
        let (model, _, inner, class) = sample();
        assert_eq!(model.qualified_name(class), "com.acme.Widget");
        assert_eq!(model.find("com.acme.Widget"), Some(class));
        assert_eq!(model.find("com.acme"), Some(inner));
        assert_eq!(model.find("com.missing"), None);
    }

    #[test]
    fn test_relationships_of_filters_by_involvement() {
        let (mut model, _, inner, class) = sample();
        let base = model.add_class(Some(inner), "Base");
        let other = model.add_class(Some(inner), "Other");
        model.generalize(class, base);
        model.relate(Relationship::Association(Association {
            end1: AssociationEnd::new(other),
            end2: AssociationEnd::new(base).navigable(),
        }));

        let of_class = model.relationships_of(class, &|_| true);
        assert_eq!(of_class.len(), 1);
        let of_base = model.relationships_of(base, &|r| r.is_association());
        assert_eq!(of_base.len(), 1);
        assert!(model.relationships_of(other, &|r| r.target().is_some()).is_empty());
    }

    #[test]
    fn test_project_author_ignores_empty() {
        let mut model = Model::new();
        assert_eq!(model.project_author(), None);
        model.project_mut().author = Some(String::new());
        assert_eq!(model.project_author(), None);
        model.project_mut().author = Some("Ada".into());
        assert_eq!(model.project_author(), Some("Ada"));
    }

    #[test]
    fn test_packages_depth_first() {
        let (mut model, root, inner, _) = sample();
        let sibling = model.add_package(Some(root), "zeta");
        assert_eq!(model.packages(), vec![root, inner, sibling]);
    }

    #[test]
    fn test_members_ignored_on_package() {
        let mut model = Model::new();
        let pkg = model.add_package(None, "p");
        model.add_operation(pkg, Operation::new("run"));
        assert!(model.element(pkg).operations().is_empty());
    }
}
