// ============================================================================
// Record Loader
// Validation boundary between raw serialized records and the engine
// ============================================================================

use crate::domain::{Direction, TradeOperation, ValidationError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// Raw trade record as it arrives on the wire.
///
/// Prices are decimal strings (rust_decimal's serde form), so no value
/// passes through binary floating point on its way into the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTradeRecord {
    pub direction: Direction,
    pub quantity: u64,
    pub price: Decimal,
    pub underlying: String,
}

/// Errors raised while turning raw input into validated trade operations.
#[derive(Debug)]
pub enum LoaderError {
    /// The input was not a well-formed JSON batch
    Parse(serde_json::Error),
    /// A structurally valid record violated an engine precondition
    Validation {
        index: usize,
        source: ValidationError,
    },
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Parse(err) => write!(f, "failed to parse trade batch: {}", err),
            LoaderError::Validation { index, source } => {
                write!(f, "record {} rejected: {}", index, source)
            },
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Parse(err) => Some(err),
            LoaderError::Validation { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for LoaderError {
    fn from(err: serde_json::Error) -> Self {
        LoaderError::Parse(err)
    }
}

/// Parse a JSON array of raw records into validated trade operations.
///
/// Rejects the whole batch on the first malformed or invalid record; the
/// engine downstream assumes every operation it sees already passed here.
pub fn operations_from_json(json: &str) -> Result<Vec<TradeOperation>, LoaderError> {
    let raw: Vec<RawTradeRecord> = serde_json::from_str(json)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            TradeOperation::try_new(
                record.direction,
                record.quantity,
                record.price,
                record.underlying,
            )
            .map_err(|source| LoaderError::Validation { index, source })
        })
        .collect()
}
