// ============================================================================
// PNL Algorithm Interface
// Defines the contract for pluggable realized-PNL algorithms
// ============================================================================

use crate::domain::TradeOperation;
use crate::engine::EngineResult;
use rust_decimal::Decimal;

/// Strategy pattern interface for realized-PNL algorithms.
/// Implementations: FIFO (shipped); average-cost or LIFO variants can plug
/// in without touching the engine.
pub trait PnlAlgorithm: Send + Sync {
    /// Compute realized PNL for one underlying's trade group.
    ///
    /// # Arguments
    /// * `trades` - The underlying's operations in arrival order
    ///
    /// # Returns
    /// The realized PNL for the group, or an internal-logic error if the
    /// algorithm's own invariants are violated (never caused by valid input).
    fn underlying_pnl(&self, trades: &[TradeOperation]) -> EngineResult<Decimal>;

    /// Get the algorithm name for logging/metrics
    fn name(&self) -> &str;
}
