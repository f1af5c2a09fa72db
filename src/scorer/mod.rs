pub mod engine;
pub mod local;
pub mod types;

pub use self::types::ScoreDetails;

use crate::links::LinkIndex;
use crate::order::Order;
use std::sync::Arc;

/// Scores circular orders against a fixed link index. Pure: no I/O, no RNG.
#[derive(Debug, Clone)]
pub struct CrossingScorer {
    pub index: Arc<LinkIndex>,
}

impl CrossingScorer {
    pub fn new(index: Arc<LinkIndex>) -> Self {
        Self { index }
    }

    /// Weighted crossing count used by the search loop.
    pub fn score(&self, order: &Order) -> u64 {
        engine::score_full(&self.index, order.as_slice()).total
    }

    /// Same count, split into its terms for reports.
    pub fn score_debug(&self, order: &Order) -> ScoreDetails {
        engine::score_full(&self.index, order.as_slice())
    }
}
