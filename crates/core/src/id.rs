//! Integer identifiers used across the domain.
//!
//! Ids are assigned by the caller (the front end picks them, typically via the
//! registry's `next_*_id` helpers). Uniqueness is a caller convention.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a registry record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u32);

impl EntityId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The identifier following this one, saturating at `u32::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for EntityId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<EntityId> for u32 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("{s:?}: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_integers() {
        assert_eq!(" 42 ".parse::<EntityId>().unwrap(), EntityId::new(42));
    }

    #[test]
    fn rejects_non_numeric_and_negative_text() {
        assert!(matches!(
            "widget".parse::<EntityId>(),
            Err(DomainError::InvalidId(_))
        ));
        assert!(matches!("-1".parse::<EntityId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn next_saturates() {
        assert_eq!(EntityId::new(1).next(), EntityId::new(2));
        assert_eq!(EntityId::new(u32::MAX).next(), EntityId::new(u32::MAX));
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&EntityId::new(5)).unwrap();
        assert_eq!(json, "5");
    }
}
