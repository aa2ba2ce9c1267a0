use gosugen_model::{ElementId, ElementKind};

use super::DeclarationWriter;
use crate::ast::EnumDeclaration;

impl DeclarationWriter<'_> {
    pub(super) fn enumeration(&self, id: ElementId) -> EnumDeclaration {
        let element = self.repo.element(id);
        let decl = EnumDeclaration::new(&element.name)
            .doc(self.doc_text(element.documentation.as_str()));
        match &element.kind {
            ElementKind::Enumeration(enumeration) => decl.literals(&enumeration.literals),
            _ => decl,
        }
    }
}
