//! One full game round: select a prize, then constrain physics to it
//!
//! The selector picks the landing slot from the prize table; the search
//! produces a trajectory that reaches it; the cache builder derives the
//! playback metadata. Each call owns its own generator and buffers, so
//! concurrent independent rounds need no locking.

use serde::{Deserialize, Serialize};

use crate::board::{BoardConfig, generate_pegs};
use crate::cache::TrajectoryCache;
use crate::error::{EngineError, ValidationError};
use crate::prize::{PrizeTable, SelectionResult, select_prize};
use crate::search::generate_trajectory;
use crate::sim::{PhysicsParams, Trajectory};

/// Everything a playback consumer needs for one round, read-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub selection: SelectionResult,
    pub trajectory: Trajectory,
    pub cache: TrajectoryCache,
    pub landed_slot: usize,
}

/// Run one round end to end
///
/// The prize table must have one entry per slot so the selected index is the
/// target slot. When `seed` is `None` a fresh one is generated; the seed
/// actually used is reported in `selection.seed_used`.
pub fn play_round(
    board: &BoardConfig,
    params: &PhysicsParams,
    table: &PrizeTable,
    seed: Option<u64>,
) -> Result<RoundOutcome, EngineError> {
    if table.len() != board.slot_count {
        return Err(ValidationError::TableSlotMismatch {
            table: table.len(),
            slots: board.slot_count,
        }
        .into());
    }

    let selection = select_prize(table, seed);
    let pegs = generate_pegs(board);
    let outcome = generate_trajectory(
        board,
        params,
        &pegs,
        selection.seed_used,
        selection.selected_index,
    )?;

    log::info!(
        "round seed {}: slot {} reached on attempt {} ({} frames)",
        selection.seed_used,
        outcome.landed_slot,
        outcome.attempts,
        outcome.trajectory.len()
    );

    Ok(RoundOutcome {
        selection,
        trajectory: outcome.trajectory,
        cache: outcome.cache,
        landed_slot: outcome.landed_slot,
    })
}
