// ============================================================================
// Engine Errors
// Internal-logic error types for PNL evaluation
// ============================================================================

use std::fmt;

/// Errors that can occur during PNL evaluation.
///
/// None of these are reachable through well-formed input: the matched
/// quantity is computed as the minimum of the two side totals, so the
/// consumption precondition holds by construction. A violation indicates a
/// bug in the caller's matched-quantity computation, not bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineError {
    /// First-N consumption was asked for more units than the side holds
    MatchedQuantityExceedsInventory { requested: u64, available: u64 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MatchedQuantityExceedsInventory {
                requested,
                available,
            } => {
                write!(
                    f,
                    "internal invariant violated: requested {} units but side holds only {}",
                    requested, available
                )
            },
        }
    }
}

impl std::error::Error for EngineError {}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
