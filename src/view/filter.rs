//! Substring search over a set of fields

use crate::core::FieldAccessor;

/// Keep the items where at least one of `fields` contains `term`.
///
/// Matching is case-insensitive and substring based ("prod" matches
/// "Product"). An empty or whitespace-only term returns every item in its
/// original order. Missing or null fields never match, but the item can
/// still match through another field. Relative order is preserved.
pub fn filter<T, F>(items: &[T], term: &str, fields: &[F]) -> Vec<T>
where
    T: FieldAccessor + Clone,
    F: AsRef<str>,
{
    let term = term.trim();
    if term.is_empty() {
        return items.to_vec();
    }

    let term = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields.iter().any(|field| {
                item.field_value(field.as_ref())
                    .and_then(|value| value.to_search_text())
                    .is_some_and(|text| text.to_lowercase().contains(&term))
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct TestItem {
        name: Option<&'static str>,
        description: Option<&'static str>,
        value: i64,
    }

    impl FieldAccessor for TestItem {
        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "name" => Some(FieldValue::from(self.name)),
                "description" => Some(FieldValue::from(self.description)),
                "value" => Some(FieldValue::Integer(self.value)),
                _ => None,
            }
        }
    }

    fn item(name: &'static str, description: &'static str, value: i64) -> TestItem {
        TestItem {
            name: Some(name),
            description: Some(description),
            value,
        }
    }

    fn test_data() -> Vec<TestItem> {
        vec![
            item("Product A", "Description A", 100),
            item("Product B", "Description B", 200),
            item("Product C", "Test Description", 300),
            item("Test Product", "Another one", 400),
        ]
    }

    #[test]
    fn test_filter_by_single_field() {
        let result = filter(&test_data(), "Product A", &["name"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, Some("Product A"));
    }

    #[test]
    fn test_filter_by_multiple_fields() {
        let result = filter(&test_data(), "Test", &["name", "description"]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].description, Some("Test Description"));
        assert_eq!(result[1].name, Some("Test Product"));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let result = filter(&test_data(), "PRODUCT", &["name"]);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_empty_term_returns_everything() {
        let data = test_data();
        assert_eq!(filter(&data, "", &["name"]), data);
        assert_eq!(filter(&data, "   ", &["name"]), data);
    }

    #[test]
    fn test_no_matches() {
        let result = filter(&test_data(), "NonExistent", &["name", "description"]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_null_fields_do_not_match() {
        let data = vec![
            TestItem {
                name: Some("Product"),
                description: None,
                value: 100,
            },
            TestItem {
                name: None,
                description: Some("Description"),
                value: 200,
            },
        ];

        let result = filter(&data, "Product", &["name", "description"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, Some("Product"));
    }

    #[test]
    fn test_term_is_trimmed() {
        let result = filter(&test_data(), "  Product A  ", &["name"]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_partial_match() {
        let result = filter(&test_data(), "Prod", &["name"]);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_non_string_fields_match_on_text_form() {
        let result = filter(&test_data(), "30", &["value"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].value, 300);
    }

    #[test]
    fn test_unknown_field_matches_nothing() {
        let result = filter(&test_data(), "Product", &["missing"]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_over_references() {
        let data = test_data();
        let refs: Vec<&TestItem> = data.iter().collect();
        let result = filter(&refs, "b", &["name"]);
        assert_eq!(result.len(), 1);
        assert!(std::ptr::eq(result[0], &data[1]));
    }
}
