// ============================================================================
// Store Module
// Per-underlying grouping of the input batch
// ============================================================================

mod trade_store;

pub use trade_store::TradeStore;
