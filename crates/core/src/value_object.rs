//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two instances
/// holding the same attributes are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct QualityRange { min: i32, max: i32 }
///
/// impl ValueObject for QualityRange {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
