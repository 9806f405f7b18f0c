// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod pnl_algorithm;

pub use pnl_algorithm::PnlAlgorithm;
