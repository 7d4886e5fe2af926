// Shared Fixtures
//
// Canned reflection data and service maps used across rule tests.

use crate::reflection::{ArrayItem, Attribute, ClassReflection, Expr, PropertyReflection};
use crate::symfony::{ServiceDefinition, ServiceMap, AUTOWIRE_LOCATOR_ATTRIBUTE};

/// Project map with the registrations most rule tests need: one public
/// service, two private ones (one under a plain id, one under a class-named
/// id).
pub fn example_service_map() -> ServiceMap {
    ServiceMap::from_definitions(vec![
        ServiceDefinition::new("foo", "App\\Foo", true, false, None),
        ServiceDefinition::new("private", "App\\Foo", false, false, None),
        ServiceDefinition::new("Foo", "Foo", false, false, None),
    ])
}

/// Class whose `property` is annotated `#[AutowireLocator([...])]` with the
/// given entries.
pub fn class_with_locator_property(
    class_name: &str,
    property: &str,
    entries: Vec<(Option<&str>, Expr)>,
) -> ClassReflection {
    let items = entries
        .into_iter()
        .map(|(key, value)| ArrayItem {
            key: key.map(str::to_string),
            value,
        })
        .collect();
    ClassReflection::new(class_name).with_property(
        PropertyReflection::new(property).with_attribute(Attribute {
            name: AUTOWIRE_LOCATOR_ATTRIBUTE.to_string(),
            args: vec![Expr::Array(items)],
        }),
    )
}
