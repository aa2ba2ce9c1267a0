//! Declaration writers.
//!
//! [`DeclarationWriter`] turns one classifier of the model into a Gosu
//! declaration node. Nested classifiers go through the same dispatch as
//! top-level ones, so an enum inside a class renders exactly as it would in
//! its own file, only indented.

mod annotation;
mod class;
mod enumeration;
mod interface;
mod member;

use gosugen_core::GenOptions;
use gosugen_model::{Element, ElementId, ElementKind, Repository};

pub use member::MethodForm;

use crate::{
    ast::{EnumDeclaration, SourceFile, TypeDeclaration, Uses},
    builder::{CodeFragment, Indent, Renderable},
    mapping,
};

/// Stereotype selecting the annotation writer for a class.
pub const ANNOTATION_TYPE_STEREOTYPE: &str = "annotationType";
/// Stereotype selecting the enhancement writer for a class.
pub const ENHANCEMENT_STEREOTYPE: &str = "Enhancement";

/// What an element is generated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Package,
    Class,
    Enhancement,
    Interface,
    Enumeration,
    AnnotationType,
    /// Unnamed elements and kinds without a Gosu counterpart.
    Skip,
}

impl DeclarationKind {
    pub fn of(element: &Element) -> Self {
        if element.name.is_empty() {
            return Self::Skip;
        }
        match &element.kind {
            ElementKind::Package(_) => Self::Package,
            ElementKind::Class(_) => match element.stereotype() {
                Some(ANNOTATION_TYPE_STEREOTYPE) => Self::AnnotationType,
                Some(ENHANCEMENT_STEREOTYPE) => Self::Enhancement,
                _ => Self::Class,
            },
            ElementKind::Interface(_) => Self::Interface,
            ElementKind::Enumeration(_) => Self::Enumeration,
            ElementKind::AnnotationType(_) => Self::AnnotationType,
            ElementKind::Other => Self::Skip,
        }
    }

    /// File extension for a top-level declaration of this kind.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            Self::Enhancement => Some("gsx"),
            Self::Class | Self::Interface | Self::Enumeration | Self::AnnotationType => Some("gs"),
            Self::Package | Self::Skip => None,
        }
    }

    /// Whether the file starts with `uses java.util.*;`.
    pub fn imports_java_util(self) -> bool {
        !matches!(self, Self::Enumeration)
    }
}

/// A rendered declaration node.
#[derive(Debug, Clone)]
pub enum Declaration {
    Type(TypeDeclaration),
    Enum(EnumDeclaration),
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Type(decl) => decl.to_fragments(),
            Self::Enum(decl) => decl.to_fragments(),
        }
    }
}

/// A complete source file for one top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub kind: DeclarationKind,
    /// `<Name>.<ext>`
    pub file_name: String,
    pub content: String,
}

/// Builds declarations from model elements.
pub struct DeclarationWriter<'a> {
    repo: &'a dyn Repository,
    options: &'a GenOptions,
}

impl<'a> DeclarationWriter<'a> {
    pub fn new(repo: &'a dyn Repository, options: &'a GenOptions) -> Self {
        Self { repo, options }
    }

    /// Build the declaration for a classifier, `None` for packages and skipped elements.
    pub fn declaration(&self, id: ElementId) -> Option<Declaration> {
        let kind = DeclarationKind::of(self.repo.element(id));
        let decl = match kind {
            DeclarationKind::Class => Declaration::Type(self.class(id)),
            DeclarationKind::Enhancement => Declaration::Type(self.enhancement(id)),
            DeclarationKind::Interface => Declaration::Type(self.interface(id)),
            DeclarationKind::AnnotationType => Declaration::Type(self.annotation(id)),
            DeclarationKind::Enumeration => Declaration::Enum(self.enumeration(id)),
            DeclarationKind::Package | DeclarationKind::Skip => return None,
        };
        Some(decl)
    }

    /// Render the file for a top-level classifier generated from `base`.
    pub fn source_file(&self, id: ElementId, base: ElementId) -> Option<GeneratedSource> {
        let element = self.repo.element(id);
        let kind = DeclarationKind::of(element);
        let extension = kind.extension()?;
        let declaration = self.declaration(id)?;

        let mut file = SourceFile::new().package(self.package_path(element, base));
        if kind.imports_java_util() {
            file = file.uses(Uses::java_util());
        }
        let content = file
            .add(&declaration)
            .render_with_indent(Indent::from(self.options));

        Some(GeneratedSource {
            kind,
            file_name: format!("{}.{}", element.name, extension),
            content,
        })
    }

    /// Dotted names from `base` down to the element's parent.
    fn package_path(&self, element: &Element, base: ElementId) -> String {
        let Some(parent) = element.parent else {
            return String::new();
        };
        self.repo
            .path_to(parent, base)
            .into_iter()
            .map(|id| self.repo.element(id).name.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Doc text, or nothing when doc comments are turned off.
    fn doc_text(&self, text: impl Into<String>) -> String {
        if self.options.gosu_doc {
            text.into()
        } else {
            String::new()
        }
    }

    /// Element documentation followed by the project `@author` line.
    fn type_doc(&self, element: &Element) -> String {
        let mut doc = element.documentation.trim().to_string();
        if let Some(author) = self.repo.project_author() {
            doc.push_str("\n@author ");
            doc.push_str(author);
        }
        self.doc_text(doc)
    }

    /// Modifiers of a type, with `abstract` added when any operation is abstract.
    fn type_modifiers(&self, element: &Element) -> Vec<String> {
        let mut modifiers = mapping::modifier_list(element);
        if mapping::has_abstract_operation(element) && !modifiers.iter().any(|m| m == "abstract")
        {
            modifiers.push("abstract".to_string());
        }
        modifiers
    }

    fn name_of(&self, id: ElementId) -> &str {
        &self.repo.element(id).name
    }

    /// Attribute fields followed by navigable association ends.
    fn with_member_variables(&self, id: ElementId, mut decl: TypeDeclaration) -> TypeDeclaration {
        let element = self.repo.element(id);
        for attribute in element.attributes() {
            if let Some(field) = self.field(attribute) {
                decl = decl.member(&field);
            }
        }
        for end in mapping::navigable_association_ends(self.repo, id) {
            if let Some(field) = self.field(end) {
                decl = decl.member(&field);
            }
        }
        decl
    }

    /// Own operations: abstract ones as signatures, the rest as stubs.
    fn with_own_operations(
        &self,
        element: &Element,
        mut decl: TypeDeclaration,
    ) -> TypeDeclaration {
        for operation in element.operations() {
            let form = if operation.modifiers.is_abstract {
                MethodForm::Signature
            } else {
                MethodForm::Stub
            };
            if let Some(method) = self.method(operation, form) {
                decl = decl.member(&method);
            }
        }
        decl
    }

    /// Stub overrides for the abstract operations of the first superclass.
    fn with_inherited_stubs(
        &self,
        supers: &[ElementId],
        mut decl: TypeDeclaration,
    ) -> TypeDeclaration {
        let Some(&first) = supers.first() else {
            return decl;
        };
        for operation in self.repo.element(first).operations() {
            if operation.modifiers.is_abstract
                && let Some(method) = self.method(operation, MethodForm::Stub)
            {
                decl = decl.member(&method);
            }
        }
        decl
    }

    fn with_nested(&self, element: &Element, mut decl: TypeDeclaration) -> TypeDeclaration {
        for &child in element.owned_elements() {
            if let Some(nested) = self.declaration(child) {
                decl = decl.member(&nested);
            }
        }
        decl
    }
}
