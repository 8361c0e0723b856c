//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, and two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// derive a new instance from it (`with_*` methods); the original stays as it
/// was. Because nothing changes after construction, value objects are safe to
/// share across threads without synchronization.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Phone(String);
///
/// impl ValueObject for Phone {}
///
/// let a = Phone("+1 555 0100".to_string());
/// let b = Phone("+1 555 0100".to_string());
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Send + Sync {}
