// Service Map
//
// Lookup table from service identifier to definition, plus literal-id
// extraction from call arguments.

use indexmap::IndexMap;

use crate::reflection::Expr;

use super::service_definition::ServiceDefinition;

/// Registered services of one analysis unit, keyed by id.
///
/// Two lifecycles exist: the project-wide map an external loader builds once
/// per run and shares read-only across evaluations, and the ephemeral
/// per-property maps built by
/// [`AutowireLocatorResolver`](super::autowire_locator::AutowireLocatorResolver)
/// for a single rule evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceMap {
    services: IndexMap<String, ServiceDefinition>,
}

impl ServiceMap {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a map from loader output. Duplicate ids keep the last
    /// definition, matching registry overwrite semantics.
    pub fn from_definitions(definitions: Vec<ServiceDefinition>) -> Self {
        let mut services = IndexMap::with_capacity(definitions.len());
        for definition in definitions {
            services.insert(definition.id.clone(), definition);
        }
        Self { services }
    }

    /// Definition registered under `id`, or `None` for unknown ids.
    /// Unknown-service reporting belongs to a different rule.
    pub fn get_service(&self, id: &str) -> Option<&ServiceDefinition> {
        self.services.get(id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Definitions in insertion order.
    pub fn services(&self) -> impl Iterator<Item = &ServiceDefinition> {
        self.services.values()
    }

    /// Extracts a concrete service id from a call argument.
    ///
    /// Only a string literal or a compile-time class-name reference carries a
    /// usable id. Every other shape yields `None` and the caller must treat
    /// the id as unknowable: a missed finding is acceptable, a wrong one is
    /// not.
    pub fn service_id_from_expr(expr: &Expr) -> Option<String> {
        match expr {
            Expr::StringLiteral(value) => Some(value.clone()),
            Expr::ClassConstRef(fqn) => Some(fqn.clone()),
            _ => None,
        }
    }
}
