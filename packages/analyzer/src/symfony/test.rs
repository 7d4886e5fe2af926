// Symfony Tests
//
// Tests for the service map and AutowireLocator resolution.

#[cfg(test)]
mod tests {
    use crate::diagnostics::AnalysisError;
    use crate::reflection::{
        ArrayItem, Attribute, AttributeReader, ClassReflection, Expr, NativeAttributeReader,
        PropertyReflection,
    };
    use crate::symfony::*;
    use crate::testing::class_with_locator_property;

    mod service_map_tests {
        use super::*;

        #[test]
        fn should_look_up_known_services() {
            let map = ServiceMap::from_definitions(vec![
                ServiceDefinition::new("mailer", "App\\Mailer", true, false, None),
                ServiceDefinition::new("private", "App\\Secret", false, false, None),
            ]);

            assert_eq!(map.len(), 2);
            assert!(map.get_service("mailer").unwrap().is_public);
            assert!(!map.get_service("private").unwrap().is_public);
            assert!(map.get_service("unknown").is_none());
        }

        #[test]
        fn should_keep_last_definition_on_duplicate_id() {
            let map = ServiceMap::from_definitions(vec![
                ServiceDefinition::new("mailer", "App\\Mailer", false, false, None),
                ServiceDefinition::new("mailer", "App\\Mailer", true, false, None),
            ]);

            assert_eq!(map.len(), 1);
            assert!(map.get_service("mailer").unwrap().is_public);
        }

        #[test]
        fn should_resolve_id_from_string_literal() {
            assert_eq!(
                ServiceMap::service_id_from_expr(&Expr::string("newsletter_manager")),
                Some("newsletter_manager".to_string())
            );
        }

        #[test]
        fn should_resolve_id_from_class_const_ref() {
            assert_eq!(
                ServiceMap::service_id_from_expr(&Expr::class_const("App\\NewsletterManager")),
                Some("App\\NewsletterManager".to_string())
            );
        }

        #[test]
        fn should_not_resolve_id_from_dynamic_shapes() {
            assert_eq!(ServiceMap::service_id_from_expr(&Expr::Variable("id".to_string())), None);
            assert_eq!(ServiceMap::service_id_from_expr(&Expr::property_fetch("id")), None);
            assert_eq!(ServiceMap::service_id_from_expr(&Expr::Other), None);
            assert_eq!(ServiceMap::service_id_from_expr(&Expr::Array(vec![])), None);
        }
    }

    mod autowire_locator_tests {
        use super::*;

        /// Reader reporting the attribute kind as unavailable.
        struct UnsupportedReader;

        impl AttributeReader for UnsupportedReader {
            fn supports(&self, _kind: &str) -> bool {
                false
            }

            fn attributes_of_property(
                &self,
                _class: &ClassReflection,
                _property: &str,
                _kind: &str,
            ) -> Vec<Attribute> {
                unreachable!("must not be consulted when the kind is unsupported")
            }
        }

        #[test]
        fn should_resolve_keyed_entries_by_alias() {
            let class = class_with_locator_property(
                "App\\NewsletterController",
                "locator",
                vec![
                    (Some("Foo"), Expr::string("Foo")),
                    (Some("private"), Expr::string("Foo")),
                ],
            );
            let resolver = AutowireLocatorResolver::new();

            let map = resolver
                .resolve(&NativeAttributeReader::new(), &class, "locator")
                .unwrap();

            assert_eq!(map.len(), 2);
            assert!(map.get_service("Foo").unwrap().is_public);
            assert!(map.get_service("private").unwrap().is_public);
            assert_eq!(map.get_service("private").unwrap().class_name, "Foo");
        }

        #[test]
        fn should_resolve_bare_entries_by_target() {
            let class = class_with_locator_property(
                "App\\NewsletterController",
                "locator",
                vec![
                    (None, Expr::string("newsletter_manager")),
                    (None, Expr::class_const("App\\NewsletterManager")),
                ],
            );
            let resolver = AutowireLocatorResolver::new();

            let map = resolver
                .resolve(&NativeAttributeReader::new(), &class, "locator")
                .unwrap();

            assert!(map.get_service("newsletter_manager").is_some());
            assert!(map.get_service("App\\NewsletterManager").is_some());
        }

        #[test]
        fn should_skip_unresolvable_entries() {
            let class = class_with_locator_property(
                "App\\NewsletterController",
                "locator",
                vec![
                    (Some("ok"), Expr::string("Foo")),
                    (Some("dynamic"), Expr::Variable("service".to_string())),
                    (None, Expr::Other),
                ],
            );
            let resolver = AutowireLocatorResolver::new();

            let map = resolver
                .resolve(&NativeAttributeReader::new(), &class, "locator")
                .unwrap();

            assert_eq!(map.len(), 1);
            assert!(map.get_service("ok").is_some());
            assert!(map.get_service("dynamic").is_none());
        }

        #[test]
        fn should_resolve_empty_map_for_empty_declaration() {
            let class = class_with_locator_property("App\\NewsletterController", "locator", vec![]);
            let resolver = AutowireLocatorResolver::new();

            let map = resolver
                .resolve(&NativeAttributeReader::new(), &class, "locator")
                .unwrap();

            assert!(map.is_empty());
        }

        #[test]
        fn should_resolve_empty_map_without_declaration() {
            let class = ClassReflection::new("App\\NewsletterController")
                .with_property(PropertyReflection::new("locator"));
            let resolver = AutowireLocatorResolver::new();

            let map = resolver
                .resolve(&NativeAttributeReader::new(), &class, "locator")
                .unwrap();

            assert!(map.is_empty());
        }

        #[test]
        fn should_resolve_empty_map_for_non_array_argument() {
            let class = ClassReflection::new("App\\NewsletterController").with_property(
                PropertyReflection::new("locator").with_attribute(Attribute {
                    name: AUTOWIRE_LOCATOR_ATTRIBUTE.to_string(),
                    args: vec![Expr::string("not-a-service-list")],
                }),
            );
            let resolver = AutowireLocatorResolver::new();

            let map = resolver
                .resolve(&NativeAttributeReader::new(), &class, "locator")
                .unwrap();

            assert!(map.is_empty());
        }

        #[test]
        fn should_resolve_empty_map_when_attribute_kind_is_unavailable() {
            let class = class_with_locator_property(
                "App\\NewsletterController",
                "locator",
                vec![(Some("Foo"), Expr::string("Foo"))],
            );
            let resolver = AutowireLocatorResolver::new();

            let map = resolver.resolve(&UnsupportedReader, &class, "locator").unwrap();

            assert!(map.is_empty());
        }

        #[test]
        fn should_fail_on_duplicate_declarations() {
            let locator_attribute = Attribute {
                name: AUTOWIRE_LOCATOR_ATTRIBUTE.to_string(),
                args: vec![Expr::Array(vec![ArrayItem {
                    key: None,
                    value: Expr::string("Foo"),
                }])],
            };
            let class = ClassReflection::new("App\\NewsletterController").with_property(
                PropertyReflection::new("locator")
                    .with_attribute(locator_attribute.clone())
                    .with_attribute(locator_attribute),
            );
            let resolver = AutowireLocatorResolver::new();

            let error = resolver
                .resolve(&NativeAttributeReader::new(), &class, "locator")
                .unwrap_err();

            assert_eq!(
                error,
                AnalysisError::DuplicateAutowireLocator {
                    class_name: "App\\NewsletterController".to_string(),
                    property: "locator".to_string(),
                }
            );
        }
    }
}
