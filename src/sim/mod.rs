//! Deterministic physics simulation
//!
//! This module must stay pure and deterministic:
//! - Fixed timestep only
//! - No wall-clock time, no ambient entropy
//! - Stable peg iteration order (lattice order)
//! - No rendering dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, ball_peg_collision, reflect_velocity};
pub use state::{
    Acceleration, Coupling, Damping, LaunchState, PhysicsParams, Restitution, Speed, Trajectory,
    TrajectoryPoint,
};
pub use tick::simulate_drop;
