//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two filter
/// selections with the same predicates are the same selection, two cart lines
/// with the same fields describe the same purchase. To "modify" one, build a
/// new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct FilterSelection {
///     category: Option<Category>,
///     brand: Option<String>,
/// }
///
/// impl ValueObject for FilterSelection {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
