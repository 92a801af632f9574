//! Collision detection and response
//!
//! Circle-vs-circle tests between the ball and each peg, plus velocity
//! reflection with a spin-coupled tangential term.

use glam::Vec2;

use crate::perp;

/// Result of a collision check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal at contact, pointing from peg center toward the ball
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check collision between the ball and a single peg
///
/// Contact occurs when center distance drops below ball radius + peg radius.
/// A ball exactly on the peg center gets an upward normal so the response
/// stays defined.
pub fn ball_peg_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    peg_pos: Vec2,
    peg_radius: f32,
) -> CollisionResult {
    let collision_radius = ball_radius + peg_radius;
    let delta = ball_pos - peg_pos;
    let dist_sq = delta.length_squared();

    if dist_sq >= collision_radius * collision_radius {
        return CollisionResult::miss();
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > 1e-6 {
        delta / dist
    } else {
        Vec2::new(0.0, -1.0)
    };

    CollisionResult {
        hit: true,
        normal,
        penetration: collision_radius - dist,
    }
}

/// Reflect velocity off a surface: v' = v - 2(v.n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Reflect with restitution and a tangential impulse from existing spin
///
/// The spin term couples rotation into linear motion: surface speed at the
/// contact point (spin * ball radius) feeds the tangential direction scaled
/// by the coupling factor.
pub fn reflect_velocity_with_spin(
    velocity: Vec2,
    normal: Vec2,
    restitution: f32,
    spin: f32,
    ball_radius: f32,
    coupling: f32,
) -> Vec2 {
    let reflected = reflect_velocity(velocity, normal) * restitution;
    let tangent = perp(normal);
    reflected + tangent * (spin * ball_radius * coupling)
}
