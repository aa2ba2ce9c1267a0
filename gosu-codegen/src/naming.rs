//! Gosu member naming conventions.
//!
//! A model attribute `Foo` becomes the backing field `_foo` exposed through
//! the property `as Foo`. All-uppercase names (constants such as `URL`) and
//! names already starting with `_` are emitted unchanged.

use gosugen_core::{is_all_uppercase, lower_first, starts_uppercase};

use crate::ast::Property;

/// The backing field name for a model attribute name.
pub fn field_name(name: &str) -> String {
    if is_all_uppercase(name) || name.starts_with('_') {
        name.to_string()
    } else {
        format!("_{}", lower_first(name))
    }
}

/// The `as [readonly] Name` accessor, present for capitalized non-constant names.
pub fn property_accessor(name: &str, readonly: bool) -> Option<Property> {
    (starts_uppercase(name) && !is_all_uppercase(name)).then(|| Property {
        name: name.to_string(),
        readonly,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("Foo"), "_foo");
        assert_eq!(field_name("FirstName"), "_firstName");
        assert_eq!(field_name("name"), "_name");
        assert_eq!(field_name("URL"), "URL");
        assert_eq!(field_name("ID"), "ID");
        assert_eq!(field_name("MAX_SIZE"), "MAX_SIZE");
        assert_eq!(field_name("_count"), "_count");
        assert_eq!(field_name("_Count"), "_Count");
    }

    #[test]
    fn test_property_accessor() {
        assert_eq!(
            property_accessor("Foo", false),
            Some(Property {
                name: "Foo".to_string(),
                readonly: false
            })
        );
        assert_eq!(
            property_accessor("Foo", true).map(|p| p.readonly),
            Some(true)
        );
        assert_eq!(property_accessor("URL", false), None);
        assert_eq!(property_accessor("foo", false), None);
        assert_eq!(property_accessor("_Foo", false), None);
    }
}
