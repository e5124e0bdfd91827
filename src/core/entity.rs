//! Entity traits defining the core abstraction for listed records

use crate::core::field::FieldValue;

/// Read access to a record's fields by name.
///
/// Search and sort are generic over this capability instead of reaching into
/// concrete struct fields. Unknown names return `None` and are treated the
/// same as a `FieldValue::Null` value.
pub trait FieldAccessor {
    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Whether the field holds a usable value
    fn has_field(&self, field: &str) -> bool {
        self.field_value(field).is_some_and(|v| !v.is_null())
    }
}

impl<T: FieldAccessor + ?Sized> FieldAccessor for &T {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        (**self).field_value(field)
    }
}

/// Base trait for records managed through a data provider.
///
/// Every entity has a string identifier and exposes its fields through
/// [`FieldAccessor`]. The resource names are used in log lines and events.
pub trait Entity: FieldAccessor + Clone + Send + Sync + 'static {
    /// The plural resource name (e.g., "products")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "product")
    fn resource_name_singular() -> &'static str;

    /// Fields searched by default when a list has no explicit configuration
    fn searchable_fields() -> &'static [&'static str];

    /// Get the unique identifier for this entity instance
    fn id(&self) -> &str;
}
