use gosugen_model::ElementId;

use super::{DeclarationWriter, MethodForm};
use crate::{ast::TypeDeclaration, mapping};

impl DeclarationWriter<'_> {
    /// `annotation Name`; attributes only, parameterless method signatures.
    pub(super) fn annotation(&self, id: ElementId) -> TypeDeclaration {
        let element = self.repo.element(id);
        let supers = mapping::super_classes(self.repo, id);

        let mut decl = TypeDeclaration::new("annotation", &element.name)
            .doc(self.type_doc(element))
            .modifiers(self.type_modifiers(element));

        for attribute in element.attributes() {
            if let Some(field) = self.field(attribute) {
                decl = decl.member(&field);
            }
        }
        for operation in element.operations() {
            if let Some(method) = self.method(operation, MethodForm::ParameterlessSignature) {
                decl = decl.member(&method);
            }
        }
        decl = self.with_inherited_stubs(&supers, decl);
        self.with_nested(element, decl)
    }
}
