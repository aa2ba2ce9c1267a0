//! Class and enhancement declarations.

use gosugen_model::ElementId;

use super::{DeclarationWriter, MethodForm};
use crate::{ast::TypeDeclaration, mapping};

impl DeclarationWriter<'_> {
    pub(super) fn class(&self, id: ElementId) -> TypeDeclaration {
        let element = self.repo.element(id);
        let supers = mapping::super_classes(self.repo, id);
        let interfaces = mapping::super_interfaces(self.repo, id);

        let mut decl = TypeDeclaration::new("class", &element.name)
            .doc(self.type_doc(element))
            .modifiers(self.type_modifiers(element));
        if let Some(&first) = supers.first() {
            decl = decl.clause(format!("extends {}", self.name_of(first)));
        }
        if !interfaces.is_empty() {
            let names: Vec<&str> = interfaces.iter().map(|&i| self.name_of(i)).collect();
            decl = decl.clause(format!("implements {}", names.join(", ")));
        }

        if let Some(constructor) = self.constructor(element) {
            decl = decl.member(&constructor);
        }
        decl = self.with_member_variables(id, decl);
        decl = self.with_own_operations(element, decl);
        decl = self.with_inherited_stubs(&supers, decl);
        for &interface in &interfaces {
            for operation in self.repo.element(interface).operations() {
                if let Some(method) = self.method(operation, MethodForm::Stub) {
                    decl = decl.member(&method);
                }
            }
        }
        self.with_nested(element, decl)
    }

    /// `enhancement Name : Base`, without constructor or interfaces.
    pub(super) fn enhancement(&self, id: ElementId) -> TypeDeclaration {
        let element = self.repo.element(id);
        let supers = mapping::super_classes(self.repo, id);

        let mut decl = TypeDeclaration::new("enhancement", &element.name)
            .doc(self.type_doc(element))
            .modifiers(mapping::modifier_list(element));
        if let Some(&first) = supers.first() {
            decl = decl.clause(format!(": {}", self.name_of(first)));
        }

        decl = self.with_member_variables(id, decl);
        decl = self.with_own_operations(element, decl);
        self.with_nested(element, decl)
    }
}

#[cfg(test)]
mod tests {
    use gosugen_core::GenOptions;
    use gosugen_model::{
        Attribute, Model, Modifiers, Operation, Parameter, Project, TypeRef, Visibility,
    };

    use crate::{
        builder::{CodeBuilder, Renderable},
        writers::{ANNOTATION_TYPE_STEREOTYPE, DeclarationWriter, ENHANCEMENT_STEREOTYPE},
    };

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::gosu();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_auto_abstract_modifier() {
        let mut model = Model::new();
        let shape = model.add_class(None, "Shape");
        model.element_mut(shape).visibility = Visibility::Public;
        model.add_operation(shape, Operation::new("name"));
        model.add_operation(
            shape,
            Operation::new("area")
                .modifiers(Modifiers::abstract_())
                .param(Parameter::returns(TypeRef::named("double"))),
        );

        let options = GenOptions {
            gosu_doc: false,
            ..GenOptions::default()
        };
        let writer = DeclarationWriter::new(&model, &options);
        insta::assert_snapshot!(render(&writer.class(shape)), @r"
        public abstract class Shape {

            public construct() {
            }

            function name() {
                // TODO implement here
            }

            abstract function area() : double

        }
        ");
    }

    #[test]
    fn test_explicit_abstract_not_duplicated() {
        let mut model = Model::new();
        let base = model.add_class(None, "Base");
        model.element_mut(base).modifiers = Modifiers::abstract_();
        model.add_operation(base, Operation::new("run").modifiers(Modifiers::abstract_()));

        let options = GenOptions::default();
        let writer = DeclarationWriter::new(&model, &options);
        let text = render(&writer.class(base));
        assert!(text.starts_with("abstract class Base {\n"));
    }

    #[test]
    fn test_extends_implements_and_inherited_stubs() {
        let mut model = Model::new();
        let base = model.add_class(None, "Base");
        model.add_operation(base, Operation::new("helper"));
        model.add_operation(
            base,
            Operation::new("size")
                .modifiers(Modifiers::abstract_())
                .param(Parameter::returns(TypeRef::named("int"))),
        );
        let other = model.add_class(None, "Other");
        let named = model.add_interface(None, "Named");
        model.add_operation(
            named,
            Operation::new("label").param(Parameter::returns(TypeRef::named("String"))),
        );
        let tagged = model.add_interface(None, "Tagged");

        let child = model.add_class(None, "Child");
        model.generalize(child, base);
        model.generalize(child, other);
        model.realize(child, named);
        model.realize(child, tagged);

        let options = GenOptions {
            gosu_doc: false,
            ..GenOptions::default()
        };
        let writer = DeclarationWriter::new(&model, &options);
        insta::assert_snapshot!(render(&writer.class(child)), @r#"
        class Child extends Base implements Named, Tagged {

            construct() {
            }

            function size() : int {
                // TODO implement here
                return 0
            }

            function label() : String {
                // TODO implement here
                return ""
            }

        }
        "#);
    }

    #[test]
    fn test_class_doc_with_author_and_fields() {
        let mut model = Model::with_project(Project {
            name: "shop".to_string(),
            author: Some("Grace".to_string()),
        });
        let item = model.add_class(None, "Item");
        model.element_mut(item).documentation = "A sellable item.".to_string();
        model.add_attribute(
            item,
            Attribute::new("Price", TypeRef::named("double")).visibility(Visibility::Private),
        );

        let options = GenOptions::default();
        let writer = DeclarationWriter::new(&model, &options);
        insta::assert_snapshot!(render(&writer.class(item)), @r"
        /**
         * A sellable item.
         * @author Grace
         */
        class Item {

            /**
             * Default constructor
             */
            construct() {
            }

            private var _price : double as Price

        }
        ");
    }

    #[test]
    fn test_nested_classifiers() {
        let mut model = Model::new();
        let outer = model.add_class(None, "Outer");
        model.add_enumeration(Some(outer), "Mode", &["ON", "OFF"]);
        model.add_class(Some(outer), "");
        let inner = model.add_interface(Some(outer), "Listener");
        model.add_operation(inner, Operation::new("fire"));

        let options = GenOptions {
            gosu_doc: false,
            ..GenOptions::default()
        };
        let writer = DeclarationWriter::new(&model, &options);
        insta::assert_snapshot!(render(&writer.class(outer)), @r"
        class Outer {

            construct() {
            }

            enum Mode {
                ON,
                OFF
            }

            interface Listener {

                function fire()

            }

        }
        ");
    }

    #[test]
    fn test_nested_stereotyped_classes() {
        let mut model = Model::new();
        let outer = model.add_class(None, "Outer");
        let ext = model.add_class(Some(outer), "Ext");
        model.set_stereotype(ext, ENHANCEMENT_STEREOTYPE);
        model.add_operation(ext, Operation::new("go").modifiers(Modifiers::abstract_()));
        let tag = model.add_class(Some(outer), "Tag");
        model.set_stereotype(tag, ANNOTATION_TYPE_STEREOTYPE);
        model.add_operation(
            tag,
            Operation::new("value")
                .param(Parameter::new("key", TypeRef::named("String")))
                .param(Parameter::returns(TypeRef::named("String"))),
        );

        let options = GenOptions {
            gosu_doc: false,
            ..GenOptions::default()
        };
        let writer = DeclarationWriter::new(&model, &options);
        insta::assert_snapshot!(render(&writer.class(outer)), @r"
        class Outer {

            construct() {
            }

            enhancement Ext {

                abstract function go()

            }

            annotation Tag {

                function value() : String

            }

        }
        ");
    }

    #[test]
    fn test_enhancement() {
        let mut model = Model::new();
        let string = model.add_class(None, "String");
        let ext = model.add_class(None, "StringExt");
        model.set_stereotype(ext, ENHANCEMENT_STEREOTYPE);
        model.generalize(ext, string);
        // interfaces are not carried into enhancements
        let loud = model.add_interface(None, "Loud");
        model.add_operation(
            loud,
            Operation::new("volume").param(Parameter::returns(TypeRef::named("int"))),
        );
        model.realize(ext, loud);
        model.add_operation(
            ext,
            Operation::new("shout").param(Parameter::returns(TypeRef::named("String"))),
        );

        let options = GenOptions {
            gosu_doc: false,
            ..GenOptions::default()
        };
        let writer = DeclarationWriter::new(&model, &options);
        insta::assert_snapshot!(render(&writer.enhancement(ext)), @r#"
        enhancement StringExt : String {

            function shout() : String {
                // TODO implement here
                return ""
            }

        }
        "#);
    }
}
