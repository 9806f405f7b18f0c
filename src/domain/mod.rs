// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod errors;
pub mod trade;

pub use errors::ValidationError;
pub use trade::{Direction, TradeOperation};
