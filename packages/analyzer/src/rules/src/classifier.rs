// Container Type Classification
//
// Ordered predicates deciding which container abstraction a `get()` receiver
// belongs to. Only the generic-container outcome gets further scrutiny; the
// other known variants already own a restricted view of the container and
// are exempt by construction.

use crate::reflection::{ClassReflection, Trinary, TypeOracle, TypeRef};

/// Permissive container used by framework test cases.
pub const TEST_CONTAINER: &str = "Symfony\\Bundle\\FrameworkBundle\\Test\\TestContainer";
/// Pre-contracts subscriber interface.
pub const LEGACY_SERVICE_SUBSCRIBER: &str =
    "Symfony\\Component\\DependencyInjection\\ServiceSubscriberInterface";
/// Modern subscriber contract.
pub const SERVICE_SUBSCRIBER: &str = "Symfony\\Contracts\\Service\\ServiceSubscriberInterface";
/// Locator already narrowed to an explicit service subset.
pub const SERVICE_LOCATOR: &str = "Symfony\\Component\\DependencyInjection\\ServiceLocator";
/// Symfony's own container interface.
pub const CONTAINER_INTERFACE: &str =
    "Symfony\\Component\\DependencyInjection\\ContainerInterface";
/// PSR-11 container interface.
pub const PSR_CONTAINER_INTERFACE: &str = "Psr\\Container\\ContainerInterface";
/// Legacy controller base class exposing `get()`.
pub const CONTROLLER: &str = "Symfony\\Bundle\\FrameworkBundle\\Controller\\Controller";
/// Modern controller base class exposing `get()`.
pub const ABSTRACT_CONTROLLER: &str =
    "Symfony\\Bundle\\FrameworkBundle\\Controller\\AbstractController";

/// Which abstraction established a generic-container classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericContainerKind {
    /// `Symfony\Component\DependencyInjection\ContainerInterface`.
    ContainerInterface,
    /// `Psr\Container\ContainerInterface`.
    PsrContainer,
    /// `Controller` / `AbstractController` bases, where `get()` is called on
    /// `$this` rather than on an injected container property.
    ControllerBase,
}

impl GenericContainerKind {
    /// Whether the AutowireLocator exemption applies to this provenance.
    /// Controller bases fetch through `$this`, never through an annotated
    /// property, so the exemption cannot apply to them.
    pub fn supports_autowire_locator(self) -> bool {
        !matches!(self, GenericContainerKind::ControllerBase)
    }
}

/// Classification of a `get()` receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerVariant {
    /// Permissive test-only container; always exempt.
    TestDouble,
    /// Pre-contracts subscriber; declares the services it needs, exempt.
    LegacySubscriber,
    /// Contracts subscriber, satisfied by the receiver or the enclosing
    /// class; exempt.
    ModernSubscriber,
    /// Locator already narrowed to an explicit subset; exempt.
    ExplicitLocator,
    /// Unrestricted container reference; the only variant checked further.
    GenericContainer(GenericContainerKind),
    /// Generic container whose backing property carries an AutowireLocator
    /// allow-list covering the fetched id. Derived during exemption
    /// evaluation; never returned by [`ContainerTypeClassifier::classify`].
    RestrictedLocatorProperty,
    /// Not a container abstraction this rule knows; no action.
    Unrecognized,
}

impl ContainerVariant {
    /// Variants that can never produce a finding.
    pub fn is_exempt(self) -> bool {
        matches!(
            self,
            ContainerVariant::TestDouble
                | ContainerVariant::LegacySubscriber
                | ContainerVariant::ModernSubscriber
                | ContainerVariant::ExplicitLocator
                | ContainerVariant::RestrictedLocatorProperty
        )
    }
}

/// Pure predicate set over the type-relation oracle.
pub struct ContainerTypeClassifier<'a> {
    oracle: &'a dyn TypeOracle,
}

impl<'a> ContainerTypeClassifier<'a> {
    pub fn new(oracle: &'a dyn TypeOracle) -> Self {
        Self { oracle }
    }

    /// First-match-wins over the ordered abstraction list. Only a definite
    /// `Yes` classifies; `Maybe` never establishes a relation.
    pub fn classify(
        &self,
        receiver_type: &TypeRef,
        enclosing_class: Option<&ClassReflection>,
    ) -> ContainerVariant {
        if self.receiver_is(receiver_type, TEST_CONTAINER).yes() {
            return ContainerVariant::TestDouble;
        }
        // Subscriber capability may live on the container reference itself or
        // on the class holding it; the framework allows either.
        if self
            .receiver_or_class_is(receiver_type, enclosing_class, LEGACY_SERVICE_SUBSCRIBER)
            .yes()
        {
            return ContainerVariant::LegacySubscriber;
        }
        if self
            .receiver_or_class_is(receiver_type, enclosing_class, SERVICE_SUBSCRIBER)
            .yes()
        {
            return ContainerVariant::ModernSubscriber;
        }
        if self.receiver_is(receiver_type, SERVICE_LOCATOR).yes() {
            return ContainerVariant::ExplicitLocator;
        }
        // Container-interface provenance is probed before the controller
        // bases so a type satisfying both keeps the locator exemption.
        if self.receiver_is(receiver_type, CONTAINER_INTERFACE).yes() {
            return ContainerVariant::GenericContainer(GenericContainerKind::ContainerInterface);
        }
        if self.receiver_is(receiver_type, PSR_CONTAINER_INTERFACE).yes() {
            return ContainerVariant::GenericContainer(GenericContainerKind::PsrContainer);
        }
        if self
            .receiver_is(receiver_type, CONTROLLER)
            .or(self.receiver_is(receiver_type, ABSTRACT_CONTROLLER))
            .yes()
        {
            return ContainerVariant::GenericContainer(GenericContainerKind::ControllerBase);
        }
        ContainerVariant::Unrecognized
    }

    fn receiver_is(&self, ty: &TypeRef, abstraction: &str) -> Trinary {
        self.oracle.is_subtype_of(ty, abstraction)
    }

    fn receiver_or_class_is(
        &self,
        ty: &TypeRef,
        enclosing_class: Option<&ClassReflection>,
        abstraction: &str,
    ) -> Trinary {
        let receiver = self.receiver_is(ty, abstraction);
        match enclosing_class {
            Some(class) => receiver.or(self
                .oracle
                .is_subtype_of(&TypeRef::object(class.name()), abstraction)),
            None => receiver,
        }
    }
}
