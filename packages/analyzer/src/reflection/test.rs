// Reflection Tests
//
// Tests for trinary logic, expressions and the attribute reader.

#[cfg(test)]
mod tests {
    use crate::reflection::*;

    mod trinary_tests {
        use super::*;

        #[test]
        fn should_or_with_yes_dominating() {
            assert_eq!(Trinary::Yes.or(Trinary::No), Trinary::Yes);
            assert_eq!(Trinary::No.or(Trinary::Yes), Trinary::Yes);
            assert_eq!(Trinary::Maybe.or(Trinary::Yes), Trinary::Yes);
        }

        #[test]
        fn should_or_with_maybe_over_no() {
            assert_eq!(Trinary::Maybe.or(Trinary::No), Trinary::Maybe);
            assert_eq!(Trinary::No.or(Trinary::Maybe), Trinary::Maybe);
            assert_eq!(Trinary::No.or(Trinary::No), Trinary::No);
        }

        #[test]
        fn should_convert_from_bool() {
            assert!(Trinary::from(true).yes());
            assert!(Trinary::from(false).no());
        }
    }

    mod expr_tests {
        use super::*;

        #[test]
        fn should_expose_property_name_for_property_fetch() {
            assert_eq!(Expr::property_fetch("locator").property_name(), Some("locator"));
            assert_eq!(Expr::string("locator").property_name(), None);
            assert_eq!(Expr::Other.property_name(), None);
        }
    }

    mod attribute_reader_tests {
        use super::*;

        fn class_with_attributes() -> ClassReflection {
            ClassReflection::new("App\\NewsletterController").with_property(
                PropertyReflection::new("locator")
                    .with_attribute(Attribute {
                        name: "Some\\Other\\Attribute".to_string(),
                        args: vec![],
                    })
                    .with_attribute(Attribute {
                        name: "Expected\\Attribute".to_string(),
                        args: vec![Expr::string("payload")],
                    }),
            )
        }

        #[test]
        fn should_filter_attributes_by_kind() {
            let class = class_with_attributes();
            let reader = NativeAttributeReader::new();

            let attributes =
                reader.attributes_of_property(&class, "locator", "Expected\\Attribute");

            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].args, vec![Expr::string("payload")]);
        }

        #[test]
        fn should_return_empty_for_unknown_property() {
            let class = class_with_attributes();
            let reader = NativeAttributeReader::new();

            let attributes =
                reader.attributes_of_property(&class, "missing", "Expected\\Attribute");

            assert!(attributes.is_empty());
        }

        #[test]
        fn should_support_all_kinds_by_default() {
            let reader = NativeAttributeReader::new();

            assert!(reader.supports("Any\\Attribute\\Kind"));
        }
    }
}
