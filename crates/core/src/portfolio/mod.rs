//! Cost-basis engine: flow aggregation, FIFO lot matching, valuation and the
//! per-scheme portfolio summary built on top of them.

pub mod aggregation;
pub mod grouping;
pub mod lot_matching;
pub mod summary;
pub mod valuation;

#[cfg(test)]
mod lot_matching_tests;

pub use aggregation::{aggregate_flows, FlowTotals};
pub use grouping::{partition_by_scheme, SchemePartition};
pub use lot_matching::{match_lots, AdjustmentNavPolicy, LotMatchResult};
pub use summary::*;
pub use valuation::{calculate_valuation, ValuationMetrics};
