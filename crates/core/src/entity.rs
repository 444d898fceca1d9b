//! Entity traits: identity + a display name for searching.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// An entity that carries a human-readable name.
///
/// The registry searches these by case-insensitive name substring.
pub trait NamedEntity: Entity {
    fn name(&self) -> &str;

    /// Case-insensitive substring test against the name.
    ///
    /// `needle_lower` must already be lowercased.
    fn name_contains(&self, needle_lower: &str) -> bool {
        self.name().to_lowercase().contains(needle_lower)
    }
}
