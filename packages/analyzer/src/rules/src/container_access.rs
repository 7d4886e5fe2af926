// Container Access Rule
//
// Flags reads of private services through an unrestricted container
// reference. One evaluation per call site; no state survives across calls,
// so evaluations are freely parallelizable.

use crate::diagnostics::{AnalysisResult, Diagnostic, PRIVATE_SERVICE};
use crate::reflection::{AttributeReader, TypeOracle};
use crate::symfony::{AutowireLocatorResolver, ServiceMap};

use super::call_site::CallSite;
use super::classifier::{ContainerTypeClassifier, ContainerVariant};

/// Container read accessor this rule watches.
const GET_METHOD: &str = "get";

/// The orchestrating rule: classifies the receiver, resolves the target
/// service id, applies the exemptions and reports private access.
pub struct ContainerAccessRule<'a> {
    service_map: &'a ServiceMap,
    oracle: &'a dyn TypeOracle,
    attribute_reader: &'a dyn AttributeReader,
    locator_resolver: AutowireLocatorResolver,
}

impl<'a> ContainerAccessRule<'a> {
    pub fn new(
        service_map: &'a ServiceMap,
        oracle: &'a dyn TypeOracle,
        attribute_reader: &'a dyn AttributeReader,
    ) -> Self {
        Self {
            service_map,
            oracle,
            attribute_reader,
            locator_resolver: AutowireLocatorResolver::new(),
        }
    }

    /// Evaluates one call site, producing at most one diagnostic.
    ///
    /// Every guard failure is a silent non-finding: without a recognized
    /// container, a concrete service id and a known registration, privacy
    /// cannot be decided soundly. Only the duplicate-AutowireLocator
    /// configuration violation is an error.
    pub fn process_call(&self, call: &CallSite) -> AnalysisResult<Vec<Diagnostic>> {
        if call.method != GET_METHOD || call.args.is_empty() {
            return Ok(Vec::new());
        }

        let classifier = ContainerTypeClassifier::new(self.oracle);
        let kind = match classifier.classify(&call.receiver_type, call.enclosing_class.as_ref()) {
            ContainerVariant::GenericContainer(kind) => kind,
            _ => return Ok(Vec::new()),
        };

        let service_id = match ServiceMap::service_id_from_expr(&call.args[0]) {
            Some(id) => id,
            None => return Ok(Vec::new()),
        };

        let service = match self.service_map.get_service(&service_id) {
            Some(service) => service,
            // Unknown ids belong to the unknown-service rule.
            None => return Ok(Vec::new()),
        };

        if kind.supports_autowire_locator() && self.is_autowire_locator_exempt(call, &service_id)?
        {
            return Ok(Vec::new());
        }

        if !service.is_public {
            return Ok(vec![Diagnostic::new(
                PRIVATE_SERVICE,
                format!("Service \"{service_id}\" is private."),
            )
            .with_line(call.line)]);
        }

        Ok(Vec::new())
    }

    /// Whether the call goes through a property whose AutowireLocator
    /// declaration lists `service_id`. The declaration is the developer's
    /// audited allow-list, so a listed id is exempt even when the
    /// project-wide registration is private.
    fn is_autowire_locator_exempt(
        &self,
        call: &CallSite,
        service_id: &str,
    ) -> AnalysisResult<bool> {
        let property = match call.receiver.property_name() {
            Some(property) => property,
            None => return Ok(false),
        };
        let class = match call.enclosing_class.as_ref() {
            Some(class) => class,
            None => return Ok(false),
        };
        if class.get_native_property(property).is_none() {
            return Ok(false);
        }

        let locator_map = self
            .locator_resolver
            .resolve(self.attribute_reader, class, property)?;
        Ok(locator_map.get_service(service_id).is_some())
    }
}
