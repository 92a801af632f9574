//! Pegfall - a deterministic plinko trajectory engine
//!
//! Core modules:
//! - `rng`: Seeded deterministic random number generation
//! - `prize`: Weighted prize selection with auditable cumulative weights
//! - `board`: Board configuration and triangular peg lattice
//! - `sim`: Deterministic physics (integration, collisions, trajectory)
//! - `search`: Bounded retry search for a trajectory reaching a target slot
//! - `cache`: Per-frame render metadata derived from a finished trajectory
//! - `round`: Selector -> search -> cache orchestration for one game round
//!
//! Everything downstream of a seed is reproducible: identical inputs produce
//! identical trajectories on every call, on every platform.

pub mod board;
pub mod cache;
pub mod error;
pub mod prize;
pub mod rng;
pub mod round;
pub mod search;
pub mod sim;

pub use board::{BoardConfig, Peg, generate_pegs};
pub use cache::{CachedValues, TrajectoryCache, cached_values, generate_trajectory_cache};
pub use error::{EngineError, GenerationError, RangeError, ValidationError};
pub use prize::{PrizeEntry, PrizeTable, SelectionResult, select_prize};
pub use rng::{SeededRng, generate_seed};
pub use round::{RoundOutcome, play_round};
pub use search::{DropOutcome, generate_trajectory};
pub use sim::{
    Damping, LaunchState, PhysicsParams, Restitution, Trajectory, TrajectoryPoint, simulate_drop,
};

use glam::Vec2;

/// Engine tuning constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Frame cap per simulation run (20 seconds at 60 Hz)
    pub const MAX_FRAMES: u32 = 1200;
    /// Attempt budget for the target-slot search
    pub const MAX_ATTEMPTS: u32 = 100;

    /// Ball and peg geometry
    pub const BALL_RADIUS: f32 = 7.0;
    pub const PEG_RADIUS: f32 = 4.0;
    /// Side wall thickness
    pub const BORDER_WIDTH: f32 = 10.0;
    /// Extra clearance between a peg and the wall face
    pub const PEG_WALL_PADDING: f32 = 2.0;

    /// Vertical acceleration (pixels/s^2)
    pub const GRAVITY: f32 = 900.0;
    /// Downward speed clamp (pixels/s)
    pub const TERMINAL_VELOCITY: f32 = 620.0;
    /// Per-frame horizontal velocity multiplier (drag)
    pub const HORIZONTAL_DAMPING: f32 = 0.994;
    /// Velocity retained after a peg bounce
    pub const PEG_RESTITUTION: f32 = 0.55;
    /// Velocity retained after a wall bounce
    pub const WALL_RESTITUTION: f32 = 0.65;
    /// Fraction of spin surface speed fed back into linear velocity on contact
    pub const SPIN_COUPLING: f32 = 0.35;
    /// Per-frame spin multiplier
    pub const SPIN_DAMPING: f32 = 0.98;
    /// Post-collision speed floor (pixels/s)
    pub const MIN_BOUNCE_SPEED: f32 = 45.0;

    /// Spawn zone above the first peg row
    pub const TOP_MARGIN: f32 = 60.0;
    /// Slot zone below the last peg row
    pub const SLOT_ZONE_HEIGHT: f32 = 70.0;
    /// Resting line inset from the board bottom
    pub const REST_LINE_INSET: f32 = 12.0;

    /// Permitted sub-pixel ball/peg overlap in emitted frames
    pub const OVERLAP_TOLERANCE: f32 = 0.05;
    /// Gap left between ball and peg after positional correction
    pub const CONTACT_SLOP: f32 = 0.01;
}

/// Normalized angle to [-PI, PI)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Perpendicular (counter-clockwise rotation by 90 degrees)
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}
