//! Read-only query interface the generator works against.

use crate::{
    element::{Element, ElementId},
    relationship::Relationship,
};

/// Read-only access to a design model.
///
/// The generator never walks relationships as pointers; it asks the
/// repository for the relationships incident to an element and filters them
/// with a predicate. Implement this trait to generate from a model stored
/// somewhere other than [`Model`](crate::Model).
pub trait Repository {
    /// Look up an element by id.
    fn element(&self, id: ElementId) -> &Element;

    /// Relationships involving `id` that satisfy `predicate`, in repository order.
    fn relationships_of(
        &self,
        id: ElementId,
        predicate: &dyn Fn(&Relationship) -> bool,
    ) -> Vec<&Relationship>;

    /// Author configured for the project, if any.
    fn project_author(&self) -> Option<&str>;

    /// Chain of elements from `base` down to `id`, both included.
    ///
    /// Empty when `base` is neither `id` nor one of its ancestors.
    fn path_to(&self, id: ElementId, base: ElementId) -> Vec<ElementId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            path.push(cur);
            if cur == base {
                path.reverse();
                return path;
            }
            current = self.element(cur).parent;
        }
        Vec::new()
    }
}
