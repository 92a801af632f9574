//! Fixed timestep trajectory integration
//!
//! One call runs a full drop to completion and returns the recorded frame
//! sequence. Coordinates are screen-space: y grows downward, the board top
//! is y = 0.

use glam::Vec2;

use super::collision::{ball_peg_collision, reflect_velocity_with_spin};
use super::state::{LaunchState, PhysicsParams, Trajectory, TrajectoryPoint};
use crate::board::{BoardConfig, Peg};
use crate::consts::*;
use crate::{normalize_angle, perp};

/// Run the integrator from `launch` until the ball crosses the rest line
///
/// Returns `None` if the frame cap is reached first (the caller treats that
/// as a failed search attempt). Each frame:
/// gravity -> damping -> integrate -> peg contact (first hit only) ->
/// walls -> bounce floor -> record.
pub fn simulate_drop(
    board: &BoardConfig,
    params: &PhysicsParams,
    pegs: &[Peg],
    launch: LaunchState,
) -> Option<Trajectory> {
    let dt = SIM_DT;
    let mut pos = launch.pos;
    let mut vel = launch.vel;
    let mut rotation = 0.0f32;
    let mut spin = 0.0f32;

    let mut points = Vec::with_capacity(256);
    points.push(TrajectoryPoint {
        frame: 0,
        pos,
        vel,
        rotation,
        peg_hit: None,
    });

    for frame in 1..=MAX_FRAMES {
        vel.y = (vel.y + params.gravity * dt).min(params.terminal_velocity);
        vel.x *= params.horizontal_damping.value();
        pos += vel * dt;

        let mut collided = false;
        let mut peg_hit = None;

        // First contact this frame wins; lattice order is stable so the
        // resolution is deterministic.
        for peg in pegs {
            let result = ball_peg_collision(pos, BALL_RADIUS, peg.pos, PEG_RADIUS);
            if result.hit {
                vel = reflect_velocity_with_spin(
                    vel,
                    result.normal,
                    params.peg_restitution.value(),
                    spin,
                    BALL_RADIUS,
                    params.spin_coupling,
                );
                // Positional correction runs after velocity resolution and is
                // mandatory: the emitted frame must sit at (or just beyond)
                // the collision radius.
                pos = peg.pos + result.normal * (BALL_RADIUS + PEG_RADIUS + CONTACT_SLOP);
                // Contact surface speed drives the new spin
                spin = perp(result.normal).dot(vel) / BALL_RADIUS;
                peg_hit = Some((peg.row, peg.col));
                collided = true;
                break;
            }
        }

        let min_x = board.min_ball_x();
        let max_x = board.max_ball_x();
        let mut wall_hit = false;
        if pos.x < min_x {
            pos.x = min_x;
            vel.x = -vel.x * params.wall_restitution.value();
            spin = -spin;
            wall_hit = true;
        } else if pos.x > max_x {
            pos.x = max_x;
            vel.x = -vel.x * params.wall_restitution.value();
            spin = -spin;
            wall_hit = true;
        }

        // The wall clamp moves the ball sideways, and on narrow boards the
        // first peg column sits within a collision radius of the wall bound,
        // so the clamp can drag the ball back into a peg it was just pushed
        // out of. With x pinned to the wall the only legal separation is
        // along the wall: slide vertically until the gap reopens.
        if wall_hit {
            collided = true;
            let clearance = BALL_RADIUS + PEG_RADIUS + CONTACT_SLOP;
            for peg in pegs {
                let dx = pos.x - peg.pos.x;
                if dx.abs() >= clearance {
                    continue;
                }
                let min_dy = (clearance * clearance - dx * dx).sqrt();
                let dy = pos.y - peg.pos.y;
                if dy.abs() < min_dy {
                    let sign = if dy >= 0.0 { 1.0 } else { -1.0 };
                    pos.y = peg.pos.y + sign * min_dy;
                }
            }
        }

        if collided {
            let speed = vel.length();
            if speed < params.min_bounce_speed {
                vel = if speed > 1e-6 {
                    vel * (params.min_bounce_speed / speed)
                } else {
                    Vec2::new(0.0, params.min_bounce_speed)
                };
            }
        }

        spin *= params.spin_damping.value();
        rotation = normalize_angle(rotation + spin * dt);

        points.push(TrajectoryPoint {
            frame,
            pos,
            vel,
            rotation,
            peg_hit,
        });

        if pos.y >= board.rest_line() {
            let landed_slot = board.slot_for_x(pos.x);
            return Some(Trajectory {
                points,
                landed_slot,
            });
        }
    }

    log::debug!("drop exceeded {MAX_FRAMES} frames without settling");
    None
}
