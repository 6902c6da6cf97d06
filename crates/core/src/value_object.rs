//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// Item categories are the canonical example here: two `AgedBrie` tags are the
/// same tag no matter which item carries them.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
