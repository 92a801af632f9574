//! Engine error types
//!
//! All validation is local and synchronous. Nothing here retries; the only
//! retry behavior in the crate is the bounded search in `search`.

use thiserror::Error;

/// Rejected input data (prize table or board configuration)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("prize table has {0} entries, expected 3 to 8")]
    TableSize(usize),
    #[error("prize probabilities sum to {0}, expected 1.0")]
    ProbabilitySum(f64),
    #[error("prize table has {table} entries but the board has {slots} slots")]
    TableSlotMismatch { table: usize, slots: usize },
    #[error("invalid board configuration: {0}")]
    Board(&'static str),
}

/// The bounded search exhausted its attempt budget
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("no trajectory reached slot {target} within {attempts} attempts (seed {seed})")]
    TargetUnreachable { target: usize, attempts: u32, seed: u64 },
    #[error("target slot {target} is out of range for {slots} slots")]
    TargetOutOfRange { target: usize, slots: usize },
}

/// A physical coefficient constructed outside its valid range
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{name} must be within [0, 1], got {value}")]
pub struct RangeError {
    pub name: &'static str,
    pub value: f32,
}

/// Umbrella error for round orchestration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Range(#[from] RangeError),
}
