// ============================================================================
// FIFO Realized-PNL Algorithm
// First-In-First-Out matching of buy and sell quantities
// ============================================================================

use crate::domain::{Direction, TradeOperation};
use crate::engine::errors::{EngineError, EngineResult};
use crate::interfaces::PnlAlgorithm;
use rust_decimal::Decimal;

/// First-In-First-Out realized-PNL algorithm.
///
/// Buy and sell quantities for an underlying are paired in arrival order,
/// up to the smaller side's total quantity. Unmatched inventory is open
/// position and carries no realized PNL (it is not marked-to-market).
///
/// # Example
/// ```text
/// Trades:  Buy 1 @ 100, Sell 4 @ 110, Buy 4 @ 120
/// matched  = min(5, 4) = 4
/// cost     = 1*100 + 3*120 = 460
/// proceeds = 4*110       = 440
/// PNL      = 440 - 460   = -20
/// ```
pub struct FifoPnl;

impl FifoPnl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FifoPnl {
    fn default() -> Self {
        Self::new()
    }
}

impl PnlAlgorithm for FifoPnl {
    fn underlying_pnl(&self, trades: &[TradeOperation]) -> EngineResult<Decimal> {
        let buy_trades: Vec<&TradeOperation> = trades
            .iter()
            .filter(|t| t.direction() == Direction::Buy)
            .collect();
        let sell_trades: Vec<&TradeOperation> = trades
            .iter()
            .filter(|t| t.direction() == Direction::Sell)
            .collect();

        // One-sided inventory is entirely open position
        if buy_trades.is_empty() || sell_trades.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let buy_quantity: u64 = buy_trades.iter().map(|t| t.quantity()).sum();
        let sell_quantity: u64 = sell_trades.iter().map(|t| t.quantity()).sum();
        let matched_quantity = buy_quantity.min(sell_quantity);

        let buy_cost = cost_of_first_units(matched_quantity, &buy_trades)?;
        let sell_proceeds = cost_of_first_units(matched_quantity, &sell_trades)?;

        Ok(sell_proceeds - buy_cost)
    }

    fn name(&self) -> &str {
        "FIFO"
    }
}

/// Cost of consuming the first `quantity` units from `trades` in order.
///
/// Whole trades are consumed greedily while they fit in the remaining
/// target; the boundary trade is consumed partially and the scan stops.
/// Single linear pass, no backtracking.
///
/// Precondition: `quantity` must not exceed the side's total quantity.
/// The caller guarantees this (matched quantity is the minimum of the two
/// side totals); a violation is surfaced as an internal-logic error.
fn cost_of_first_units(quantity: u64, trades: &[&TradeOperation]) -> EngineResult<Decimal> {
    let available: u64 = trades.iter().map(|t| t.quantity()).sum();
    if quantity > available {
        return Err(EngineError::MatchedQuantityExceedsInventory {
            requested: quantity,
            available,
        });
    }

    let mut remaining = quantity;
    let mut total = Decimal::ZERO;

    for trade in trades {
        if trade.quantity() <= remaining {
            total += trade.notional();
            remaining -= trade.quantity();
        } else {
            total += Decimal::from(remaining) * trade.price();
            break;
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn buy(quantity: u64, price: i64) -> TradeOperation {
        TradeOperation::new(Direction::Buy, quantity, Decimal::from(price), "Oil")
    }

    fn sell(quantity: u64, price: i64) -> TradeOperation {
        TradeOperation::new(Direction::Sell, quantity, Decimal::from(price), "Oil")
    }

    fn pnl(trades: &[TradeOperation]) -> Decimal {
        FifoPnl::new().underlying_pnl(trades).unwrap()
    }

    #[test]
    fn test_consumes_whole_trades_in_order() {
        let trades = vec![buy(2, 100), buy(2, 110)];
        let refs: Vec<&TradeOperation> = trades.iter().collect();

        assert_eq!(
            cost_of_first_units(4, &refs).unwrap(),
            Decimal::from(2 * 100 + 2 * 110)
        );
    }

    #[test]
    fn test_partial_consumption_of_boundary_trade() {
        let trades = vec![buy(2, 100), buy(5, 110), buy(3, 120)];
        let refs: Vec<&TradeOperation> = trades.iter().collect();

        // 2 whole units at 100, then 3 of the 5 at 110; the 120s are untouched
        assert_eq!(
            cost_of_first_units(5, &refs).unwrap(),
            Decimal::from(2 * 100 + 3 * 110)
        );
    }

    #[test]
    fn test_zero_quantity_consumes_nothing() {
        let trades = vec![buy(2, 100)];
        let refs: Vec<&TradeOperation> = trades.iter().collect();

        assert_eq!(cost_of_first_units(0, &refs).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_precondition_violation_is_an_error() {
        let trades = vec![buy(2, 100), buy(3, 110)];
        let refs: Vec<&TradeOperation> = trades.iter().collect();

        assert_eq!(
            cost_of_first_units(6, &refs).unwrap_err(),
            EngineError::MatchedQuantityExceedsInventory {
                requested: 6,
                available: 5
            }
        );
    }

    #[test]
    fn test_one_sided_group_has_zero_pnl() {
        assert_eq!(pnl(&[buy(2, 100), buy(3, 110)]), Decimal::ZERO);
        assert_eq!(pnl(&[sell(4, 95)]), Decimal::ZERO);
        assert_eq!(pnl(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_fully_matched_inventory() {
        // Equal totals: everything on both sides is matched
        assert_eq!(pnl(&[buy(2, 100), sell(2, 110)]), Decimal::from(20));
    }

    #[test]
    fn test_excess_sell_quantity_is_excluded() {
        // matched = 1; the remaining 3 sold units stay open
        assert_eq!(pnl(&[buy(1, 100), sell(4, 110)]), Decimal::from(10));
    }

    #[test]
    fn test_buys_after_sells_still_match_in_arrival_order() {
        // sell_qty=7, buy_qty=15, matched=7; first 7 bought units all at 10
        assert_eq!(
            pnl(&[sell(3, 10), sell(4, 20), buy(10, 10), buy(5, 20)]),
            Decimal::from(40)
        );
    }

    #[test]
    fn test_fractional_prices_stay_exact() {
        // 0.1 + 0.2 style sums must not drift
        let trades = vec![
            TradeOperation::new(Direction::Buy, 1, Decimal::new(1001, 1), "Oil"),
            TradeOperation::new(Direction::Sell, 1, Decimal::new(1103, 1), "Oil"),
        ];

        // 110.3 - 100.1 = 10.2
        assert_eq!(pnl(&trades), Decimal::new(102, 1));
    }

    // ========================================================================
    // Property Tests
    // ========================================================================

    fn arb_side(direction: Direction) -> impl Strategy<Value = Vec<TradeOperation>> {
        prop::collection::vec((1u64..50, 1i64..1_000), 1..20).prop_map(move |pairs| {
            pairs
                .into_iter()
                .map(|(quantity, price)| {
                    TradeOperation::new(direction, quantity, Decimal::from(price), "Oil")
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_consumption_never_exceeds_inventory(
            trades in arb_side(Direction::Buy),
            target in 0u64..2_000,
        ) {
            let available: u64 = trades.iter().map(|t| t.quantity()).sum();
            let refs: Vec<&TradeOperation> = trades.iter().collect();
            let result = cost_of_first_units(target, &refs);

            if target <= available {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(
                    result.unwrap_err(),
                    EngineError::MatchedQuantityExceedsInventory {
                        requested: target,
                        available,
                    }
                );
            }
        }

        #[test]
        fn prop_full_consumption_equals_side_notional(trades in arb_side(Direction::Sell)) {
            let available: u64 = trades.iter().map(|t| t.quantity()).sum();
            let refs: Vec<&TradeOperation> = trades.iter().collect();
            let notional: Decimal = trades.iter().map(|t| t.notional()).sum();

            prop_assert_eq!(cost_of_first_units(available, &refs).unwrap(), notional);
        }

        #[test]
        fn prop_one_sided_groups_are_zero(trades in arb_side(Direction::Buy)) {
            prop_assert_eq!(FifoPnl::new().underlying_pnl(&trades).unwrap(), Decimal::ZERO);
        }

        #[test]
        fn prop_valid_groups_never_error(
            buys in arb_side(Direction::Buy),
            sells in arb_side(Direction::Sell),
        ) {
            let mut trades = buys;
            trades.extend(sells);

            prop_assert!(FifoPnl::new().underlying_pnl(&trades).is_ok());
        }
    }
}
