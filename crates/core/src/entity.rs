//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same thing iff their ids are equal, regardless of
/// any other attribute they carry.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
