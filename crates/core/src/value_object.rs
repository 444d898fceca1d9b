//! Value objects: equality by value, not identity.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects have **no identity**; two with the same attribute values are
/// interchangeable. To "modify" one, build a new one.
///
/// - `Price { cents: 999 }` is a value object
/// - `Part { id: PartId(1), .. }` is an entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A non-negative currency amount, stored in the smallest currency unit.
///
/// Text form is a plain decimal with at most two fractional digits
/// (`"9.99"`, `"10"`, `"0.5"`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    cents: u64,
}

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Parse a decimal amount such as `"19.99"`.
    pub fn parse(text: &str) -> DomainResult<Self> {
        let text = text.trim();
        if text.starts_with('-') {
            return Err(DomainError::validation("price cannot be negative"));
        }

        let (whole, frac) = match text.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (text, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(DomainError::validation(format!("invalid price {text:?}")));
        }
        if frac.len() > 2 {
            return Err(DomainError::validation(format!(
                "price {text:?} has more than two decimal places"
            )));
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(DomainError::validation(format!("invalid price {text:?}")));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| DomainError::validation(format!("price {text:?} is too large")))?
        };
        // "5" in the first fractional place means fifty cents.
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => u64::from(frac.as_bytes()[0] - b'0') * 10 + u64::from(frac.as_bytes()[1] - b'0'),
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .map(Self::from_cents)
            .ok_or_else(|| DomainError::validation(format!("price {text:?} is too large")))
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}
