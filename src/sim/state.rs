//! Simulation state and trajectory types
//!
//! Everything a playback consumer reads lives here. A `Trajectory` and its
//! derived cache are produced once per round and handed over read-only.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::RangeError;

/// Acceleration in pixels/s^2
pub type Acceleration = f32;
/// Speed in pixels/s
pub type Speed = f32;
/// Dimensionless coupling factor
pub type Coupling = f32;

/// Fraction of velocity retained after a bounce, valid in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Restitution(f32);

impl Restitution {
    pub fn new(value: f32) -> Result<Self, RangeError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RangeError {
                name: "restitution",
                value,
            })
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

/// Per-frame velocity multiplier for drag, valid in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Damping(f32);

impl Damping {
    pub fn new(value: f32) -> Result<Self, RangeError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RangeError {
                name: "damping",
                value,
            })
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

/// Physical coefficients for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    pub gravity: Acceleration,
    pub terminal_velocity: Speed,
    pub horizontal_damping: Damping,
    pub peg_restitution: Restitution,
    pub wall_restitution: Restitution,
    pub spin_coupling: Coupling,
    pub spin_damping: Damping,
    pub min_bounce_speed: Speed,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            terminal_velocity: TERMINAL_VELOCITY,
            horizontal_damping: Damping(HORIZONTAL_DAMPING),
            peg_restitution: Restitution(PEG_RESTITUTION),
            wall_restitution: Restitution(WALL_RESTITUTION),
            spin_coupling: SPIN_COUPLING,
            spin_damping: Damping(SPIN_DAMPING),
            min_bounce_speed: MIN_BOUNCE_SPEED,
        }
    }
}

/// Initial ball state for one integrator run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchState {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// One recorded simulation frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Frame index, strictly increasing from 0
    pub frame: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ball rotation in [-PI, PI)
    pub rotation: f32,
    /// Peg contacted this frame, if any, as (row, col)
    pub peg_hit: Option<(usize, usize)>,
}

/// Full drop from launch to rest, immutable once produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub points: Vec<TrajectoryPoint>,
    /// Final column index the ball settled in
    pub landed_slot: usize,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restitution_accepts_unit_interval() {
        assert!(Restitution::new(0.0).is_ok());
        assert!(Restitution::new(1.0).is_ok());
        assert_eq!(Restitution::new(0.55).unwrap().value(), 0.55);
    }

    #[test]
    fn restitution_rejects_out_of_range() {
        assert!(Restitution::new(-0.1).is_err());
        assert!(Restitution::new(1.01).is_err());
    }

    #[test]
    fn damping_rejects_out_of_range() {
        assert!(Damping::new(2.0).is_err());
        assert!(Damping::new(-0.5).is_err());
        assert!(Damping::new(0.994).is_ok());
    }

    #[test]
    fn default_params_are_in_range() {
        let params = PhysicsParams::default();
        assert!(Restitution::new(params.peg_restitution.value()).is_ok());
        assert!(Restitution::new(params.wall_restitution.value()).is_ok());
        assert!(Damping::new(params.horizontal_damping.value()).is_ok());
    }
}
