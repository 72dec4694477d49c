//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A stock item keeps its identity while its quantity changes; lookups in the
/// inventory go through this identifier.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
