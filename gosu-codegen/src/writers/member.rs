//! Constructors, fields and methods.

use gosugen_model::{Attribute, Element, Operation};

use super::DeclarationWriter;
use crate::{
    ast::{Constructor, Field, Function, Param},
    mapping::{self, modifier_list, type_expression, visibility_token},
    naming::{field_name, property_accessor},
};

/// Placeholder statement at the top of every stub body.
pub const STUB_MARKER: &str = "// TODO implement here";

/// How an operation is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodForm {
    /// Concrete method with a placeholder body; `abstract` is dropped.
    Stub,
    /// Signature only, as for abstract and interface methods.
    Signature,
    /// Signature without parameters, as for annotation methods.
    ParameterlessSignature,
}

impl MethodForm {
    fn has_body(self) -> bool {
        matches!(self, Self::Stub)
    }
}

impl DeclarationWriter<'_> {
    pub(super) fn constructor(&self, element: &Element) -> Option<Constructor> {
        if element.name.is_empty() {
            return None;
        }
        Some(
            Constructor::new()
                .doc(self.doc_text("Default constructor"))
                .visibility(visibility_token(element.visibility)),
        )
    }

    pub(super) fn field(&self, attribute: &Attribute) -> Option<Field> {
        if attribute.name.is_empty() {
            tracing::trace!("skipping unnamed attribute");
            return None;
        }
        Some(
            Field::new(
                field_name(&attribute.name),
                type_expression(self.repo, attribute),
            )
            .doc(self.doc_text(attribute.documentation.as_str()))
            .modifiers(modifier_list(attribute))
            .property(property_accessor(
                &attribute.name,
                attribute.modifiers.is_read_only,
            ))
            .default_value(attribute.default_value.as_deref()),
        )
    }

    pub(super) fn method(&self, operation: &Operation, form: MethodForm) -> Option<Function> {
        if operation.name.is_empty() {
            tracing::trace!("skipping unnamed operation");
            return None;
        }

        let mut modifiers = modifier_list(operation);
        if form.has_body() {
            modifiers.retain(|m| m != "abstract");
        }

        let mut function = Function::new(&operation.name)
            .doc(self.doc_text(method_doc(operation)))
            .modifiers(modifiers);

        if form != MethodForm::ParameterlessSignature {
            for param in operation.non_return_parameters() {
                function = function.param(Param::new(&param.name, type_expression(self.repo, param)));
            }
        }

        let return_type = operation
            .return_parameter()
            .map(|ret| type_expression(self.repo, ret));
        if let Some(ty) = &return_type {
            function = function.returns(ty);
        }

        if form.has_body() {
            function = function.body_line(STUB_MARKER);
            if let Some(statement) = return_type.as_deref().and_then(mapping::return_statement) {
                function = function.body_line(statement);
            }
        }

        Some(function)
    }
}

/// Operation documentation with `@param` and `@return` lines regenerated
/// from the parameters.
fn method_doc(operation: &Operation) -> String {
    let mut doc = String::new();
    for line in operation.documentation.trim().lines() {
        if !line.starts_with("@param") && !line.starts_with("@return") {
            doc.push('\n');
            doc.push_str(line);
        }
    }
    for param in operation.non_return_parameters() {
        doc.push_str(&format!("\n@param {} {}", param.name, param.documentation));
    }
    if let Some(ret) = operation.return_parameter() {
        doc.push_str(&format!("\n@return {}", ret.documentation));
    }
    doc
}

#[cfg(test)]
mod tests {
    use gosugen_core::GenOptions;
    use gosugen_model::{Model, Modifiers, Parameter, TypeRef, Visibility};

    use super::*;
    use crate::builder::{CodeBuilder, Renderable};

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::gosu();
        builder.emit(node);
        builder.build()
    }

    fn with_writer(f: impl FnOnce(&DeclarationWriter<'_>)) {
        let model = Model::new();
        let options = GenOptions::default();
        f(&DeclarationWriter::new(&model, &options));
    }

    #[test]
    fn test_field_capitalized_name() {
        with_writer(|writer| {
            let attr = Attribute::new("Foo", TypeRef::named("String")).visibility(Visibility::Private);
            let field = writer.field(&attr).unwrap();
            assert_eq!(render(&field), "private var _foo : String as Foo\n");
        });
    }

    #[test]
    fn test_field_all_caps_name() {
        with_writer(|writer| {
            let attr = Attribute::new("URL", TypeRef::named("String")).modifiers(Modifiers::static_());
            let field = writer.field(&attr).unwrap();
            assert_eq!(render(&field), "static var URL : String\n");
        });
    }

    #[test]
    fn test_field_readonly_with_default() {
        with_writer(|writer| {
            let attr = Attribute::new("Count", TypeRef::named("int"))
                .modifiers(Modifiers {
                    is_read_only: true,
                    ..Modifiers::default()
                })
                .default_value("5")
                .doc("How many");
            let field = writer.field(&attr).unwrap();
            assert_eq!(
                render(&field),
                "/**\n * How many\n */\nvar _count : int as readonly Count = 5\n"
            );
        });
    }

    #[test]
    fn test_unnamed_members_are_skipped() {
        with_writer(|writer| {
            assert!(writer.field(&Attribute::new("", TypeRef::named("int"))).is_none());
            assert!(writer.method(&Operation::new(""), MethodForm::Stub).is_none());
        });
    }

    #[test]
    fn test_stub_drops_abstract_and_returns_literal() {
        with_writer(|writer| {
            let op = Operation::new("isReady")
                .visibility(Visibility::Public)
                .modifiers(Modifiers::abstract_())
                .param(Parameter::returns(TypeRef::named("boolean")));

            let stub = writer.method(&op, MethodForm::Stub).unwrap();
            assert_eq!(
                render(&stub),
                "/**\n * @return\n */\npublic function isReady() : boolean {\n    // TODO implement here\n    return false\n}\n"
            );

            let signature = writer.method(&op, MethodForm::Signature).unwrap();
            assert_eq!(
                render(&signature),
                "/**\n * @return\n */\npublic abstract function isReady() : boolean\n"
            );
        });
    }

    #[test]
    fn test_void_stub_has_no_return_statement() {
        with_writer(|writer| {
            let op = Operation::new("doIt").param(Parameter::returns(TypeRef::named("void")));
            let stub = writer.method(&op, MethodForm::Stub).unwrap();
            assert_eq!(
                render(&stub),
                "/**\n * @return\n */\nfunction doIt() : void {\n    // TODO implement here\n}\n"
            );
        });
    }

    #[test]
    fn test_method_doc_regenerates_tags() {
        let op = Operation::new("move")
            .doc("Moves the piece.\n@param old stale\n@return stale")
            .param(Parameter::new("dx", TypeRef::named("int")).doc("horizontal step"))
            .param(Parameter::new("dy", TypeRef::named("int")))
            .param(Parameter::returns(TypeRef::named("boolean")).doc("true if moved"));
        assert_eq!(
            method_doc(&op),
            "\nMoves the piece.\n@param dx horizontal step\n@param dy \n@return true if moved"
        );
    }

    #[test]
    fn test_parameterless_signature() {
        with_writer(|writer| {
            let op = Operation::new("value")
                .param(Parameter::new("ignored", TypeRef::named("int")))
                .param(Parameter::returns(TypeRef::named("String")));
            let method = writer.method(&op, MethodForm::ParameterlessSignature).unwrap();
            assert_eq!(
                render(&method),
                "/**\n * @param ignored\n * @return\n */\nfunction value() : String\n"
            );
        });
    }

    #[test]
    fn test_collection_parameters() {
        with_writer(|writer| {
            let op = Operation::new("addAll")
                .param(Parameter::new("items", TypeRef::named("String")).multiplicity("*"));
            let method = writer.method(&op, MethodForm::Stub).unwrap();
            assert!(render(&method).contains("function addAll(items:Set<String>) {\n"));
        });
    }

    #[test]
    fn test_constructor() {
        let mut model = Model::new();
        let class = model.add_class(None, "A");
        model.element_mut(class).visibility = Visibility::Public;
        let options = GenOptions {
            gosu_doc: false,
            ..GenOptions::default()
        };
        let writer = DeclarationWriter::new(&model, &options);
        let ctor = writer.constructor(model.element(class)).unwrap();
        assert_eq!(render(&ctor), "public construct() {\n}\n");
    }
}
