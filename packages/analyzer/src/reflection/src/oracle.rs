// Type Oracle
//
// The hosting engine's view of the analyzed program's type hierarchy.

use super::trinary::Trinary;

/// Static type of an expression, as reported by the hosting engine.
///
/// Opaque to the analyzer: the only thing it can do with one is ask the
/// oracle how it relates to a named abstraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    name: String,
}

impl TypeRef {
    /// Type of an object instance with the given fully-qualified class name.
    pub fn object(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Answers whether a type is (a subtype of) a named abstraction.
///
/// The analyzer never walks a class hierarchy itself; the hosting engine owns
/// full knowledge of the analyzed program and answers these queries, possibly
/// with `Maybe` when the relation cannot be established statically.
pub trait TypeOracle {
    fn is_subtype_of(&self, ty: &TypeRef, abstraction: &str) -> Trinary;
}
