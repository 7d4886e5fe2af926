// Reflection Host
//
// Class, property and attribute metadata handed over by the hosting engine.

use indexmap::IndexMap;

use super::expr::Expr;

/// An attribute instance attached to a declaration, with its raw argument
/// expressions (unevaluated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Fully-qualified attribute name.
    pub name: String,
    /// Arguments of the attribute invocation.
    pub args: Vec<Expr>,
}

/// One declared property of an analyzed class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyReflection {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl PropertyReflection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Reflection of the class lexically enclosing a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassReflection {
    name: String,
    properties: IndexMap<String, PropertyReflection>,
}

impl ClassReflection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyReflection) -> Self {
        self.properties.insert(property.name.clone(), property);
        self
    }

    /// Fully-qualified class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Property declared on this class itself, by name.
    pub fn get_native_property(&self, name: &str) -> Option<&PropertyReflection> {
        self.properties.get(name)
    }
}

/// Reads structured attribute declarations off class properties.
///
/// Abstracts how attributes are embedded in source syntax; consumers only see
/// attribute names and argument expressions.
pub trait AttributeReader {
    /// Whether the attribute kind exists at all in the environment the
    /// analyzed project targets (older runtimes may predate it).
    fn supports(&self, kind: &str) -> bool {
        let _ = kind;
        true
    }

    /// All attributes of the given kind on `class::property`, in declaration
    /// order. Empty when the property does not exist.
    fn attributes_of_property(
        &self,
        class: &ClassReflection,
        property: &str,
        kind: &str,
    ) -> Vec<Attribute>;
}

/// Reader backed directly by host-populated [`ClassReflection`] data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeAttributeReader;

impl NativeAttributeReader {
    pub fn new() -> Self {
        Self
    }
}

impl AttributeReader for NativeAttributeReader {
    fn attributes_of_property(
        &self,
        class: &ClassReflection,
        property: &str,
        kind: &str,
    ) -> Vec<Attribute> {
        class
            .get_native_property(property)
            .map(|prop| {
                prop.attributes
                    .iter()
                    .filter(|attribute| attribute.name == kind)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
