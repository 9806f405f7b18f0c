// ============================================================================
// Trade Record Store
// Partitions an input batch into per-underlying ordered groups
// ============================================================================

use crate::domain::TradeOperation;
use std::collections::HashMap;

/// Per-underlying grouping of trade operations.
///
/// Operations sharing an underlying keep their relative arrival order.
/// FIFO matching depends on that order, so the store never reorders a
/// group after construction. Built once from the full input batch and
/// read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct TradeStore {
    groups: HashMap<String, Vec<TradeOperation>>,
}

impl TradeStore {
    /// Build the store from an ordered batch of operations.
    ///
    /// Groups are disjoint and exhaustive over the input: every operation
    /// lands in exactly the group named by its underlying. Empty input
    /// produces an empty store.
    pub fn from_operations(operations: impl IntoIterator<Item = TradeOperation>) -> Self {
        let mut groups: HashMap<String, Vec<TradeOperation>> = HashMap::new();

        for operation in operations {
            groups
                .entry(operation.underlying().to_string())
                .or_default()
                .push(operation);
        }

        Self { groups }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The ordered group for one underlying, if any operations referenced it.
    pub fn group(&self, underlying: &str) -> Option<&[TradeOperation]> {
        self.groups.get(underlying).map(Vec::as_slice)
    }

    /// Iterate all groups. Iteration order across underlyings is arbitrary;
    /// within a group, arrival order is preserved.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[TradeOperation])> {
        self.groups
            .iter()
            .map(|(underlying, trades)| (underlying.as_str(), trades.as_slice()))
    }

    /// Number of distinct underlyings in the batch.
    pub fn underlying_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of operations across all groups.
    pub fn operation_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
