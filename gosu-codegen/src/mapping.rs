//! Mapping rules from model constructs to Gosu tokens.

use gosugen_model::{
    Attribute, Element, ElementId, Modifiers, Operation, Parameter, Relationship, Repository,
    TypeRef, Visibility,
};

/// Anything carrying a visibility and modifier flags.
pub trait Modified {
    fn declared_visibility(&self) -> Visibility;
    fn declared_modifiers(&self) -> Modifiers;
}

impl Modified for Element {
    fn declared_visibility(&self) -> Visibility {
        self.visibility
    }

    fn declared_modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl Modified for Attribute {
    fn declared_visibility(&self) -> Visibility {
        self.visibility
    }

    fn declared_modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl Modified for Operation {
    fn declared_visibility(&self) -> Visibility {
        self.visibility
    }

    fn declared_modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

/// Anything with a type reference and a cardinality.
pub trait Typed {
    fn type_ref(&self) -> &TypeRef;
    fn multiplicity(&self) -> Option<&str>;
    fn is_ordered(&self) -> bool;
}

impl Typed for Attribute {
    fn type_ref(&self) -> &TypeRef {
        &self.ty
    }

    fn multiplicity(&self) -> Option<&str> {
        self.multiplicity.as_deref()
    }

    fn is_ordered(&self) -> bool {
        self.is_ordered
    }
}

impl Typed for Parameter {
    fn type_ref(&self) -> &TypeRef {
        &self.ty
    }

    fn multiplicity(&self) -> Option<&str> {
        self.multiplicity.as_deref()
    }

    fn is_ordered(&self) -> bool {
        self.is_ordered
    }
}

/// Keyword for a visibility; `None` for package-default.
pub fn visibility_token(visibility: Visibility) -> Option<&'static str> {
    match visibility {
        Visibility::Public => Some("public"),
        Visibility::Protected => Some("protected"),
        Visibility::Private => Some("private"),
        Visibility::Package => None,
    }
}

/// Modifiers in declaration order: visibility, `static`, `abstract`, `final`.
pub fn modifier_list(item: &impl Modified) -> Vec<String> {
    let flags = item.declared_modifiers();
    let mut modifiers = Vec::new();
    if let Some(token) = visibility_token(item.declared_visibility()) {
        modifiers.push(token.to_string());
    }
    if flags.is_static {
        modifiers.push("static".to_string());
    }
    if flags.is_abstract {
        modifiers.push("abstract".to_string());
    }
    if flags.is_final() {
        modifiers.push("final".to_string());
    }
    modifiers
}

/// Displayed name of a type reference, `void` when nothing usable is set.
pub fn type_name(repo: &dyn Repository, ty: &TypeRef) -> String {
    let name = match ty {
        TypeRef::Element(id) => repo.element(*id).name.as_str(),
        TypeRef::Named(name) => name.as_str(),
        TypeRef::Unspecified => "",
    };
    if name.is_empty() {
        "void".to_string()
    } else {
        name.to_string()
    }
}

/// Wrap a type according to a multiplicity.
///
/// `*`, `0..*` and `1..*` become `List<T>` (ordered) or `Set<T>`; a numeric
/// literal other than `1` becomes the array `T[]`.
pub fn apply_multiplicity(ty: String, multiplicity: Option<&str>, ordered: bool) -> String {
    let Some(multiplicity) = multiplicity else {
        return ty;
    };
    if matches!(multiplicity.trim(), "0..*" | "1..*" | "*") {
        if ordered {
            format!("List<{}>", ty)
        } else {
            format!("Set<{}>", ty)
        }
    } else if multiplicity != "1"
        && !multiplicity.is_empty()
        && multiplicity.chars().all(|c| c.is_ascii_digit())
    {
        format!("{}[]", ty)
    } else {
        ty
    }
}

/// Full type expression of an attribute, parameter or association end.
pub fn type_expression(repo: &dyn Repository, item: &impl Typed) -> String {
    apply_multiplicity(
        type_name(repo, item.type_ref()),
        item.multiplicity(),
        item.is_ordered(),
    )
}

/// Generalization targets of `id`, in repository order.
pub fn super_classes(repo: &dyn Repository, id: ElementId) -> Vec<ElementId> {
    repo.relationships_of(id, &|rel| rel.is_generalization_from(id))
        .into_iter()
        .filter_map(Relationship::target)
        .collect()
}

/// Interface realization targets of `id`, in repository order.
pub fn super_interfaces(repo: &dyn Repository, id: ElementId) -> Vec<ElementId> {
    repo.relationships_of(id, &|rel| rel.is_realization_from(id))
        .into_iter()
        .filter_map(Relationship::target)
        .collect()
}

/// Opposite association ends that are navigable from `id`.
///
/// For each association, `end2` is yielded when `id` is `end1`, then `end1`
/// when `id` is `end2`; a self-association can yield both.
pub fn navigable_association_ends(repo: &dyn Repository, id: ElementId) -> Vec<&Attribute> {
    let mut ends = Vec::new();
    for rel in repo.relationships_of(id, &Relationship::is_association) {
        let Relationship::Association(assoc) = rel else {
            continue;
        };
        if assoc.end1.reference == id && assoc.end2.navigable {
            ends.push(&assoc.end2.feature);
        }
        if assoc.end2.reference == id && assoc.end1.navigable {
            ends.push(&assoc.end1.feature);
        }
    }
    ends
}

/// `return` statement for a stub body, `None` for `void`.
pub fn return_statement(return_type: &str) -> Option<String> {
    let literal = match return_type {
        "void" => return None,
        "boolean" => "false",
        "int" | "long" | "short" | "byte" => "0",
        "float" => "0.0f",
        "double" => "0.0d",
        "char" => "'0'",
        "String" => "\"\"",
        _ => "null",
    };
    Some(format!("return {}", literal))
}

/// True when any operation of the element is abstract.
pub fn has_abstract_operation(element: &Element) -> bool {
    element
        .operations()
        .iter()
        .any(|op| op.modifiers.is_abstract)
}
