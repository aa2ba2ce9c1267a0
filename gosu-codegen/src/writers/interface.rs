use gosugen_model::ElementId;

use super::{DeclarationWriter, MethodForm};
use crate::{ast::TypeDeclaration, mapping};

impl DeclarationWriter<'_> {
    /// `interface Name extends A, B` with signature-only methods.
    pub(super) fn interface(&self, id: ElementId) -> TypeDeclaration {
        let element = self.repo.element(id);
        let supers = mapping::super_classes(self.repo, id);

        let visibility = mapping::visibility_token(element.visibility)
            .map(str::to_string)
            .into_iter()
            .collect();
        let mut decl = TypeDeclaration::new("interface", &element.name)
            .doc(self.doc_text(element.documentation.as_str()))
            .modifiers(visibility);
        if !supers.is_empty() {
            let names: Vec<&str> = supers.iter().map(|&s| self.name_of(s)).collect();
            decl = decl.clause(format!("extends {}", names.join(", ")));
        }

        decl = self.with_member_variables(id, decl);
        for operation in element.operations() {
            if let Some(method) = self.method(operation, MethodForm::Signature) {
                decl = decl.member(&method);
            }
        }
        self.with_nested(element, decl)
    }
}
