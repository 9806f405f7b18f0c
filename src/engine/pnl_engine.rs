// ============================================================================
// PNL Engine
// Core business logic for realized-PNL aggregation
// ============================================================================

use crate::domain::TradeOperation;
use crate::engine::errors::EngineResult;
use crate::engine::FifoPnl;
use crate::interfaces::PnlAlgorithm;
use crate::store::TradeStore;
use rust_decimal::Decimal;

/// Realized-PNL engine with a pluggable matching algorithm.
///
/// Owns one partition of the input batch into per-underlying trade groups
/// and evaluates the configured algorithm over each group. Evaluation is a
/// pure function of the constructed batch: `pnl` may be called any number
/// of times and always returns the same value.
pub struct PnlEngine {
    /// Per-underlying trade groups, built once at construction
    store: TradeStore,

    /// Pluggable realized-PNL algorithm
    algorithm: Box<dyn PnlAlgorithm>,
}

impl PnlEngine {
    /// Create an engine over `operations` using FIFO matching.
    ///
    /// The constructor performs grouping only; empty input is valid and
    /// raises no errors.
    pub fn new(operations: impl IntoIterator<Item = TradeOperation>) -> Self {
        Self::with_algorithm(operations, Box::new(FifoPnl::new()))
    }

    /// Create an engine with an explicit algorithm.
    pub fn with_algorithm(
        operations: impl IntoIterator<Item = TradeOperation>,
        algorithm: Box<dyn PnlAlgorithm>,
    ) -> Self {
        let store = TradeStore::from_operations(operations);

        tracing::debug!(
            "PNL engine constructed: {} operations across {} underlyings, algorithm {}",
            store.operation_count(),
            store.underlying_count(),
            algorithm.name()
        );

        Self { store, algorithm }
    }

    /// The per-underlying trade groups backing this engine.
    pub fn store(&self) -> &TradeStore {
        &self.store
    }

    /// Total realized PNL: the sum of per-underlying results.
    ///
    /// Underlyings are fully independent, so summation order (arbitrary map
    /// order) cannot affect the exact decimal result.
    ///
    /// # Errors
    /// Only internal-logic errors from the algorithm; never raised for
    /// well-formed input.
    pub fn pnl(&self) -> EngineResult<Decimal> {
        let mut total = Decimal::ZERO;

        for (underlying, trades) in self.store.groups() {
            let underlying_pnl = self.algorithm.underlying_pnl(trades)?;
            tracing::debug!("Realized PNL for {}: {}", underlying, underlying_pnl);
            total += underlying_pnl;
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    fn op(direction: Direction, quantity: u64, price: i64, underlying: &str) -> TradeOperation {
        TradeOperation::new(direction, quantity, Decimal::from(price), underlying)
    }

    #[test]
    fn test_empty_batch_has_zero_pnl() {
        let engine = PnlEngine::new(Vec::new());
        assert_eq!(engine.pnl().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_pnl_is_idempotent() {
        let engine = PnlEngine::new(vec![
            op(Direction::Buy, 2, 100, "Oil"),
            op(Direction::Sell, 2, 110, "Oil"),
        ]);

        let first = engine.pnl().unwrap();
        let second = engine.pnl().unwrap();
        assert_eq!(first, Decimal::from(20));
        assert_eq!(first, second);
    }

    #[test]
    fn test_underlyings_are_netted_independently() {
        let engine = PnlEngine::new(vec![
            op(Direction::Buy, 1, 100, "Oil"),
            op(Direction::Sell, 4, 110, "Gas"),
            op(Direction::Buy, 2, 120, "Gas"),
            op(Direction::Sell, 5, 115, "Oil"),
        ]);

        // Oil: matched=1, 115 - 100 = 15; Gas: matched=2, 220 - 240 = -20
        assert_eq!(engine.pnl().unwrap(), Decimal::from(-5));
    }

    #[test]
    fn test_custom_algorithm_is_used() {
        struct ZeroPnl;

        impl PnlAlgorithm for ZeroPnl {
            fn underlying_pnl(&self, _trades: &[TradeOperation]) -> EngineResult<Decimal> {
                Ok(Decimal::ZERO)
            }

            fn name(&self) -> &str {
                "Zero"
            }
        }

        let engine = PnlEngine::with_algorithm(
            vec![
                op(Direction::Buy, 2, 100, "Oil"),
                op(Direction::Sell, 2, 110, "Oil"),
            ],
            Box::new(ZeroPnl),
        );

        assert_eq!(engine.pnl().unwrap(), Decimal::ZERO);
    }
}
