// AutowireLocator Resolution
//
// Turns an `#[AutowireLocator(...)]` declaration on a container-typed
// property into a service map of the services that property may fetch.

use crate::diagnostics::{AnalysisError, AnalysisResult};
use crate::reflection::{Attribute, AttributeReader, ClassReflection, Expr};

use super::service_definition::ServiceDefinition;
use super::service_map::ServiceMap;

/// Fully-qualified name of the AutowireLocator attribute.
pub const AUTOWIRE_LOCATOR_ATTRIBUTE: &str =
    "Symfony\\Component\\DependencyInjection\\Attribute\\AutowireLocator";

/// Resolves the curated allow-list an AutowireLocator declaration grants to
/// one property.
///
/// The resulting map's entries are all public: the declaration itself is the
/// developer's explicit, audited allow-list, so fetching a listed service
/// through the annotated property is legitimate regardless of the service's
/// project-wide visibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutowireLocatorResolver;

impl AutowireLocatorResolver {
    pub fn new() -> Self {
        Self
    }

    /// Builds the allow-list map declared on `class::property`.
    ///
    /// Returns an empty map when the attribute kind is unavailable in the
    /// analyzed environment, the property carries no declaration, or the
    /// declaration's value is not a recognized locator-argument shape. More
    /// than one declaration on the same property is an authoring error and
    /// aborts the run.
    pub fn resolve(
        &self,
        reader: &dyn AttributeReader,
        class: &ClassReflection,
        property: &str,
    ) -> AnalysisResult<ServiceMap> {
        if !reader.supports(AUTOWIRE_LOCATOR_ATTRIBUTE) {
            return Ok(ServiceMap::empty());
        }

        let attributes = reader.attributes_of_property(class, property, AUTOWIRE_LOCATOR_ATTRIBUTE);
        if attributes.is_empty() {
            return Ok(ServiceMap::empty());
        }
        if attributes.len() > 1 {
            return Err(AnalysisError::DuplicateAutowireLocator {
                class_name: class.name().to_string(),
                property: property.to_string(),
            });
        }

        Ok(Self::map_from_attribute(&attributes[0]))
    }

    fn map_from_attribute(attribute: &Attribute) -> ServiceMap {
        let items = match attribute.args.first() {
            Some(Expr::Array(items)) => items,
            _ => return ServiceMap::empty(),
        };

        let mut definitions = Vec::with_capacity(items.len());
        for item in items {
            // A value that is not statically nameable contributes no
            // exemption.
            let target = match ServiceMap::service_id_from_expr(&item.value) {
                Some(target) => target,
                None => continue,
            };
            // Keyed entries are fetched by their local alias; bare entries by
            // the target name itself.
            let id = item.key.clone().unwrap_or_else(|| target.clone());
            definitions.push(ServiceDefinition::new(
                id,
                target,
                true,
                false,
                item.key.clone(),
            ));
        }

        ServiceMap::from_definitions(definitions)
    }
}
