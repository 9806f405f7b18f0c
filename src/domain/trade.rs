// ============================================================================
// Trade Operation Domain Model
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

use super::ValidationError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Side of a trade operation.
///
/// A closed two-value enum: invalid directions are unconstructible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Buy,
    Sell,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Buy => write!(f, "Buy"),
            Direction::Sell => write!(f, "Sell"),
        }
    }
}

// ============================================================================
// Trade Operation
// ============================================================================

/// One transaction record.
///
/// A pure value with no identity beyond its fields: two operations with the
/// same direction, quantity, price, and underlying are interchangeable.
/// Quantity and price are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TradeOperation {
    direction: Direction,
    quantity: u64,
    price: Decimal,
    underlying: String,
}

impl TradeOperation {
    /// Create a trade operation from already-validated input.
    ///
    /// The engine's contract requires `quantity > 0` and a non-empty
    /// `underlying`; callers holding unchecked input should use
    /// [`TradeOperation::try_new`] instead.
    pub fn new(
        direction: Direction,
        quantity: u64,
        price: Decimal,
        underlying: impl Into<String>,
    ) -> Self {
        Self {
            direction,
            quantity,
            price,
            underlying: underlying.into(),
        }
    }

    /// Create a trade operation, rejecting input that violates the engine's
    /// preconditions.
    ///
    /// # Errors
    /// Returns [`ValidationError::ZeroQuantity`] if `quantity == 0` and
    /// [`ValidationError::EmptyUnderlying`] if `underlying` is empty.
    pub fn try_new(
        direction: Direction,
        quantity: u64,
        price: Decimal,
        underlying: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }

        let underlying = underlying.into();
        if underlying.is_empty() {
            return Err(ValidationError::EmptyUnderlying);
        }

        Ok(Self {
            direction,
            quantity,
            price,
            underlying,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// The instrument identifier that partitions trades into independent
    /// matching pools.
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Notional value of the operation (quantity * price).
    pub fn notional(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}
