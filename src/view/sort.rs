//! Stable field sort with missing values last

use crate::core::query::SortDirection;
use crate::core::{FieldAccessor, FieldValue};
use std::cmp::Ordering;

/// Return a sorted copy of `items`, ordered by `field` in `direction`.
///
/// - `None` or an empty field name returns the items in their original order.
/// - Missing or null values always sort after present values, in both
///   directions.
/// - The sort is stable: items with equal keys keep their input order.
///
/// The input slice is never reordered.
pub fn sort<T>(items: &[T], field: Option<&str>, direction: SortDirection) -> Vec<T>
where
    T: FieldAccessor + Clone,
{
    let Some(field) = field.filter(|f| !f.is_empty()) else {
        return items.to_vec();
    };

    // Keys are read once per item instead of once per comparison.
    let mut keyed: Vec<(Option<FieldValue>, T)> = items
        .iter()
        .map(|item| {
            let key = item.field_value(field).filter(|v| !v.is_null());
            (key, item.clone())
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare(a.as_ref(), b.as_ref(), direction));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Three-way comparison with the missing-last rule.
///
/// Only the comparison between two present values is reversed by
/// `Descending`.
pub fn compare(a: Option<&FieldValue>, b: Option<&FieldValue>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = a.compare(b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

/// Flip ascending and descending
pub fn toggle_direction(direction: SortDirection) -> SortDirection {
    direction.toggle()
}
