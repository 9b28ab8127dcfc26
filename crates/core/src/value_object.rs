//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ItemName(String);
///
/// impl ValueObject for ItemName {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
