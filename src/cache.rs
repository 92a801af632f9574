//! Per-frame render metadata derived from a finished trajectory
//!
//! Playback reads speed, squash/stretch scale, and trail length by frame
//! index instead of re-running physics math. The cache is a set of parallel
//! fixed-width arrays aligned 1:1 with the trajectory.

use serde::{Deserialize, Serialize};

use crate::sim::Trajectory;

/// Speed thresholds for the trail-length step function (pixels/s)
pub const TRAIL_SPEED_LOW: f32 = 120.0;
pub const TRAIL_SPEED_HIGH: f32 = 320.0;
/// Trail lengths per speed band, capped at the long value
pub const TRAIL_SHORT: f32 = 5.0;
pub const TRAIL_MEDIUM: f32 = 10.0;
pub const TRAIL_LONG: f32 = 20.0;

/// Minimum impact speed for squash deformation
pub const SQUASH_MIN_SPEED: f32 = 180.0;
/// Minimum fall speed for stretch deformation
pub const STRETCH_MIN_FALL: f32 = 300.0;

/// Squash: widen horizontally, compress vertically
pub const SQUASH_SCALE: (f32, f32) = (1.3, 0.7);
/// Stretch: compress horizontally, elongate vertically
pub const STRETCH_SCALE: (f32, f32) = (0.85, 1.2);

/// Parallel per-frame arrays, index-aligned with the trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryCache {
    pub speeds: Vec<f32>,
    pub scale_x: Vec<f32>,
    pub scale_y: Vec<f32>,
    pub trail_lengths: Vec<f32>,
}

impl TrajectoryCache {
    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }
}

/// Values a renderer reads for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CachedValues {
    pub speed: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub trail_length: f32,
}

impl Default for CachedValues {
    fn default() -> Self {
        Self {
            speed: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            trail_length: TRAIL_MEDIUM,
        }
    }
}

fn trail_length_for_speed(speed: f32) -> f32 {
    if speed < TRAIL_SPEED_LOW {
        TRAIL_SHORT
    } else if speed < TRAIL_SPEED_HIGH {
        TRAIL_MEDIUM
    } else {
        TRAIL_LONG
    }
}

/// Build the cache for a trajectory, a pure function
///
/// Per frame: speed is the velocity magnitude; scale is squash on a fast peg
/// hit, stretch on a fast hitless fall, identity otherwise; trail length is
/// a step function of speed.
pub fn generate_trajectory_cache(trajectory: &Trajectory) -> TrajectoryCache {
    let n = trajectory.len();
    let mut cache = TrajectoryCache {
        speeds: Vec::with_capacity(n),
        scale_x: Vec::with_capacity(n),
        scale_y: Vec::with_capacity(n),
        trail_lengths: Vec::with_capacity(n),
    };

    for point in &trajectory.points {
        let speed = point.vel.length();
        let (sx, sy) = if point.peg_hit.is_some() && speed > SQUASH_MIN_SPEED {
            SQUASH_SCALE
        } else if point.peg_hit.is_none() && point.vel.y > STRETCH_MIN_FALL {
            STRETCH_SCALE
        } else {
            (1.0, 1.0)
        };

        cache.speeds.push(speed);
        cache.scale_x.push(sx);
        cache.scale_y.push(sy);
        cache.trail_lengths.push(trail_length_for_speed(speed));
    }

    cache
}

/// Read one frame of cached values
///
/// A missing cache, a negative frame, or an index past the end all return
/// the defaults (speed 0, scales 1, trail length 10); this never errors.
pub fn cached_values(cache: Option<&TrajectoryCache>, frame: i64) -> CachedValues {
    let Some(cache) = cache else {
        return CachedValues::default();
    };
    let Ok(index) = usize::try_from(frame) else {
        return CachedValues::default();
    };
    if index >= cache.len() {
        return CachedValues::default();
    }
    CachedValues {
        speed: cache.speeds[index],
        scale_x: cache.scale_x[index],
        scale_y: cache.scale_y[index],
        trail_length: cache.trail_lengths[index],
    }
}
