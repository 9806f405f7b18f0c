// ============================================================================
// Engine Module
// Contains the realized-PNL algorithms and engine facade
// ============================================================================

mod errors;
mod fifo;
mod pnl_engine;

pub use errors::{EngineError, EngineResult};
pub use fifo::FifoPnl;
pub use pnl_engine::PnlEngine;
