// Test Oracles
//
// Table-driven stand-ins for the hosting engine's type oracle.

use std::collections::HashSet;

use crate::reflection::{Trinary, TypeOracle, TypeRef};

/// Oracle answering from an explicit (type, abstraction) table.
///
/// Every type is a subtype of itself; everything not in the table is `No`,
/// unless registered as `Maybe`.
#[derive(Debug, Clone, Default)]
pub struct FixedTypeOracle {
    subtypes: HashSet<(String, String)>,
    maybes: HashSet<(String, String)>,
}

impl FixedTypeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `ty` a subtype of `abstraction`.
    pub fn with_subtype(mut self, ty: &str, abstraction: &str) -> Self {
        self.subtypes.insert((ty.to_string(), abstraction.to_string()));
        self
    }

    /// Declares the relation between `ty` and `abstraction` undecidable.
    pub fn with_maybe(mut self, ty: &str, abstraction: &str) -> Self {
        self.maybes.insert((ty.to_string(), abstraction.to_string()));
        self
    }
}

impl TypeOracle for FixedTypeOracle {
    fn is_subtype_of(&self, ty: &TypeRef, abstraction: &str) -> Trinary {
        let key = (ty.name().to_string(), abstraction.to_string());
        if ty.name() == abstraction || self.subtypes.contains(&key) {
            Trinary::Yes
        } else if self.maybes.contains(&key) {
            Trinary::Maybe
        } else {
            Trinary::No
        }
    }
}
