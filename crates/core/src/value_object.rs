//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two values with the same attributes are
/// equal and interchangeable. Coordinates and footprints are value objects;
/// items are entities (see [`crate::Entity`]).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
