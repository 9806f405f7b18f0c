// ============================================================================
// Domain Errors
// Validation errors for trade operation construction
// ============================================================================

use std::fmt;

/// Errors raised when constructing a trade operation from unchecked input.
///
/// The engine itself never produces these: malformed records are rejected
/// at the validation boundary, before grouping or matching runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Quantity must be a positive integer
    ZeroQuantity,
    /// Underlying identifier must be non-empty
    EmptyUnderlying,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ZeroQuantity => {
                write!(f, "invalid trade operation: quantity must be positive")
            },
            ValidationError::EmptyUnderlying => {
                write!(f, "invalid trade operation: underlying must be non-empty")
            },
        }
    }
}

impl std::error::Error for ValidationError {}
