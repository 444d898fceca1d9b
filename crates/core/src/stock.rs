//! Stock levels shared by parts and products.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// On-hand quantity plus the allowed band `[min, max]`.
///
/// `min <= max` always holds. `on_hand` may sit outside the band; callers that
/// want to enforce it use [`StockLevels::ensure_within_bounds`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStockLevels")]
pub struct StockLevels {
    on_hand: u32,
    min: u32,
    max: u32,
}

impl ValueObject for StockLevels {}

impl StockLevels {
    pub fn new(on_hand: u32, min: u32, max: u32) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::validation(format!(
                "minimum stock ({min}) cannot exceed maximum stock ({max})"
            )));
        }
        Ok(Self { on_hand, min, max })
    }

    pub fn on_hand(&self) -> u32 {
        self.on_hand
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Same band, different on-hand quantity.
    pub fn with_on_hand(self, on_hand: u32) -> Self {
        Self { on_hand, ..self }
    }

    pub fn within_bounds(&self) -> bool {
        (self.min..=self.max).contains(&self.on_hand)
    }

    pub fn ensure_within_bounds(&self) -> DomainResult<()> {
        if self.within_bounds() {
            Ok(())
        } else {
            Err(DomainError::validation(format!(
                "stock ({}) must be between minimum ({}) and maximum ({})",
                self.on_hand, self.min, self.max
            )))
        }
    }
}

#[derive(Deserialize)]
struct RawStockLevels {
    on_hand: u32,
    min: u32,
    max: u32,
}

impl TryFrom<RawStockLevels> for StockLevels {
    type Error = DomainError;

    fn try_from(raw: RawStockLevels) -> Result<Self, Self::Error> {
        Self::new(raw.on_hand, raw.min, raw.max)
    }
}
