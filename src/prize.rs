//! Weighted prize selection
//!
//! A prize table maps each landing slot to a probability and payload. The
//! selector builds a prefix-sum cumulative distribution, draws once from a
//! seeded generator, and reports the draw alongside the cumulative table so
//! a round can be audited after the fact.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::rng::{SeededRng, generate_seed};

/// Allowed prize table sizes
pub const MIN_PRIZES: usize = 3;
pub const MAX_PRIZES: usize = 8;

/// Tolerance on the probability sum
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// One slot's probability and payout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeEntry {
    pub probability: f64,
    pub payload: String,
}

impl PrizeEntry {
    pub fn new(probability: f64, payload: impl Into<String>) -> Self {
        Self {
            probability,
            payload: payload.into(),
        }
    }
}

/// Validated, ordered prize table
///
/// Construction is the validation gate: a `PrizeTable` in hand always has
/// 3 to 8 entries whose probabilities sum to 1.0 within tolerance, so no
/// partially-valid selector can exist downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PrizeEntry>", into = "Vec<PrizeEntry>")]
pub struct PrizeTable {
    entries: Vec<PrizeEntry>,
}

impl PrizeTable {
    pub fn new(entries: Vec<PrizeEntry>) -> Result<Self, ValidationError> {
        if entries.len() < MIN_PRIZES || entries.len() > MAX_PRIZES {
            return Err(ValidationError::TableSize(entries.len()));
        }
        let sum: f64 = entries.iter().map(|e| e.probability).sum();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(ValidationError::ProbabilitySum(sum));
        }
        Ok(Self { entries })
    }

    /// Uniform table over `n` slots
    pub fn uniform(n: usize) -> Result<Self, ValidationError> {
        let p = 1.0 / n as f64;
        Self::new(
            (0..n)
                .map(|i| PrizeEntry::new(p, format!("slot-{i}")))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[PrizeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<PrizeEntry>> for PrizeTable {
    type Error = ValidationError;

    fn try_from(entries: Vec<PrizeEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<PrizeTable> for Vec<PrizeEntry> {
    fn from(table: PrizeTable) -> Self {
        table.entries
    }
}

/// Outcome of one weighted draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub selected_index: usize,
    pub seed_used: u64,
    /// Strictly non-decreasing, final element ~= 1.0
    pub cumulative_weights: Vec<f64>,
}

/// Pick a prize index by weighted draw
///
/// When `seed` is `None` a fresh one is generated and reported back in the
/// result. The same seed always selects the same index for the same table.
pub fn select_prize(table: &PrizeTable, seed: Option<u64>) -> SelectionResult {
    let seed_used = seed.unwrap_or_else(generate_seed);
    let mut rng = SeededRng::new(seed_used);

    let mut cumulative_weights = Vec::with_capacity(table.len());
    let mut acc = 0.0;
    for entry in table.entries() {
        acc += entry.probability;
        cumulative_weights.push(acc);
    }

    let r = rng.next_f64();
    let selected_index = cumulative_weights
        .iter()
        .position(|&w| w >= r)
        .unwrap_or(table.len() - 1);

    SelectionResult {
        selected_index,
        seed_used,
        cumulative_weights,
    }
}
