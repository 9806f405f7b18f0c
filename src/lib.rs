// ============================================================================
// PNL Engine Library
// Realized profit-and-loss with FIFO matching and exact decimal arithmetic
// ============================================================================

//! # PNL Engine
//!
//! Computes realized profit-and-loss for a batch of trading operations
//! using First-In-First-Out matching between buy and sell quantities.
//!
//! ## Features
//!
//! - **FIFO matching** per underlying instrument, in arrival order
//! - **Exact decimal arithmetic** via `rust_decimal` (no binary floats)
//! - **Pluggable PNL algorithms** behind the [`PnlAlgorithm`] trait
//! - **Pure evaluation** - `pnl` is idempotent and side-effect free
//!
//! ## Example
//!
//! ```rust
//! use pnl_engine::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let engine = PnlEngine::new(vec![
//!     TradeOperation::new(Direction::Buy, 2, Decimal::from(100), "Oil"),
//!     TradeOperation::new(Direction::Sell, 2, Decimal::from(110), "Oil"),
//! ]);
//!
//! assert_eq!(engine.pnl().unwrap(), Decimal::from(20));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod store;

#[cfg(feature = "serde")]
pub mod loader;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Direction, TradeOperation, ValidationError};
    pub use crate::engine::{EngineError, EngineResult, FifoPnl, PnlEngine};
    pub use crate::interfaces::PnlAlgorithm;
    pub use crate::store::TradeStore;
}
