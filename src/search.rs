//! Bounded search for a trajectory landing in a required slot
//!
//! The integrator's outcome is sensitive to initial conditions, and the
//! target slot is fixed in advance by the selector. The search derives a
//! deterministic launch variation from (seed, attempt), runs the full
//! integrator, and accepts the first trajectory that lands on target. The
//! loop is iterative and strictly bounded; exhaustion is an error, never a
//! wrong-slot trajectory.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::board::{BoardConfig, Peg};
use crate::cache::{TrajectoryCache, generate_trajectory_cache};
use crate::consts::*;
use crate::error::GenerationError;
use crate::sim::{LaunchState, PhysicsParams, Trajectory, simulate_drop};

/// Splitmix golden gamma, spreads attempt indices across seed space
const ATTEMPT_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Maximum lateral velocity nudge per attempt (pixels/s)
const MAX_VELOCITY_NUDGE: f32 = 40.0;

/// Spawn offset bound, in slot widths either side of board center. Wide
/// enough that attempts start above every slot, including the edge ones.
const MAX_OFFSET_SLOTS: f32 = 1.5;

/// Accepted trajectory plus derived playback data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropOutcome {
    pub trajectory: Trajectory,
    pub cache: TrajectoryCache,
    pub landed_slot: usize,
    pub seed: u64,
    /// Attempt index that produced the accepted trajectory
    pub attempts: u32,
}

/// Launch state for one attempt, a pure function of (board, seed, attempt)
///
/// A per-attempt Pcg32 seeded with `seed ^ (attempt * gamma)` draws a spawn
/// offset within [`MAX_OFFSET_SLOTS`] slot widths of board center and a
/// small horizontal velocity nudge. The offset is kept inside the walls.
fn launch_for_attempt(board: &BoardConfig, seed: u64, attempt: u32) -> LaunchState {
    let attempt_seed = seed ^ (attempt as u64).wrapping_mul(ATTEMPT_GAMMA);
    let mut rng = crate::rng::SeededRng::new(attempt_seed);
    let max_offset = board.slot_width() * MAX_OFFSET_SLOTS;
    let offset = rng.next_range(-max_offset, max_offset);
    let nudge = rng.next_range(-MAX_VELOCITY_NUDGE, MAX_VELOCITY_NUDGE);
    let x = (board.width / 2.0 + offset).clamp(board.min_ball_x(), board.max_ball_x());
    LaunchState {
        pos: Vec2::new(x, BALL_RADIUS),
        vel: Vec2::new(nudge, 0.0),
    }
}

/// Search for a trajectory that lands in `target_slot`
///
/// Runs up to [`crate::consts::MAX_ATTEMPTS`] integrator passes. For a fixed
/// (seed, target, board, params) the attempt sequence and the accepted
/// trajectory are identical on every invocation.
pub fn generate_trajectory(
    board: &BoardConfig,
    params: &PhysicsParams,
    pegs: &[Peg],
    seed: u64,
    target_slot: usize,
) -> Result<DropOutcome, GenerationError> {
    generate_trajectory_with_budget(board, params, pegs, seed, target_slot, MAX_ATTEMPTS)
}

/// Same as [`generate_trajectory`] with an explicit attempt budget
///
/// Exposed so the attempt count stays inspectable under test.
pub fn generate_trajectory_with_budget(
    board: &BoardConfig,
    params: &PhysicsParams,
    pegs: &[Peg],
    seed: u64,
    target_slot: usize,
    max_attempts: u32,
) -> Result<DropOutcome, GenerationError> {
    if target_slot >= board.slot_count {
        return Err(GenerationError::TargetOutOfRange {
            target: target_slot,
            slots: board.slot_count,
        });
    }

    for attempt in 0..max_attempts {
        let launch = launch_for_attempt(board, seed, attempt);
        let Some(trajectory) = simulate_drop(board, params, pegs, launch) else {
            continue;
        };
        if trajectory.landed_slot == target_slot {
            log::debug!(
                "seed {seed}: attempt {attempt} landed in slot {target_slot} \
                 after {} frames",
                trajectory.len()
            );
            let cache = generate_trajectory_cache(&trajectory);
            return Ok(DropOutcome {
                trajectory,
                cache,
                landed_slot: target_slot,
                seed,
                attempts: attempt,
            });
        }
    }

    log::warn!("seed {seed}: no attempt out of {max_attempts} reached slot {target_slot}");
    Err(GenerationError::TargetUnreachable {
        target: target_slot,
        attempts: max_attempts,
        seed,
    })
}
