//! Collision detection and response for the ball
//!
//! All tests are discrete: the ball is checked where it ends up after a tick,
//! so a fast ball can tunnel through geometry thinner than one step of travel.

use glam::Vec2;

use super::rect::Rect;
use crate::clamp;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal at collision (pointing toward the ball, for reflection)
    pub normal: Vec2,
    /// Penetration depth (for position correction)
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

    fn hit(normal: Vec2, penetration: f32) -> Self {
        Self {
            hit: true,
            normal,
            penetration,
        }
    }
}

/// Which velocity component a brick hit inverts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    X,
    Y,
}

/// True iff the circle touches or overlaps the rectangle
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = rect.nearest_point(center);
    center.distance_squared(nearest) <= radius * radius
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Check collision with the left and right screen edges
pub fn ball_side_wall_collision(ball_pos: Vec2, ball_radius: f32, width: f32) -> CollisionResult {
    if ball_pos.x - ball_radius <= 0.0 {
        return CollisionResult::hit(Vec2::X, ball_radius - ball_pos.x);
    }
    if ball_pos.x + ball_radius >= width {
        return CollisionResult::hit(-Vec2::X, ball_pos.x + ball_radius - width);
    }
    CollisionResult::miss()
}

/// Check collision with the top screen edge
pub fn ball_top_wall_collision(ball_pos: Vec2, ball_radius: f32) -> CollisionResult {
    if ball_pos.y - ball_radius <= 0.0 {
        return CollisionResult::hit(Vec2::Y, ball_radius - ball_pos.y);
    }
    CollisionResult::miss()
}

/// Check if the ball fell fully out through the bottom edge
pub fn ball_lost(ball_pos: Vec2, ball_radius: f32, height: f32) -> bool {
    ball_pos.y - ball_radius > height
}

/// New ball velocity after an angled paddle hit
///
/// The horizontal offset from the paddle centre, as a ratio in [-1, 1], maps
/// linearly onto [-max_angle, max_angle] from straight up. Speed is kept.
pub fn paddle_deflection(ball_x: f32, paddle: &Rect, speed: f32, max_angle: f32) -> Vec2 {
    let offset = (ball_x - paddle.center().x) / (paddle.w / 2.0);
    let angle = clamp(offset, -1.0, 1.0) * max_angle;
    Vec2::new(speed * angle.sin(), -speed * angle.cos())
}

/// Pick the axis to invert for a brick hit
///
/// Compares the ball centre's offset from the contact point on each axis; the
/// axis with the larger offset is the one the ball came in along.
pub fn brick_bounce_axis(ball_pos: Vec2, brick: &Rect) -> BounceAxis {
    let contact = brick.nearest_point(ball_pos);
    if (ball_pos.x - contact.x).abs() > (ball_pos.y - contact.y).abs() {
        BounceAxis::X
    } else {
        BounceAxis::Y
    }
}
