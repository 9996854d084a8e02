//! Face tracker input
//!
//! A tracker reports where the player's nose is as a normalized control point
//! in `[0, 1]²`, or nothing when no face is visible. The adapter smooths that
//! signal and turns it into a paddle position.

use std::collections::VecDeque;

use glam::Vec2;

use crate::config::{GameConfig, PaddleMovement};
use crate::consts::INPUT_REST_POINT;
use crate::lerp;
use crate::sim::state::{Brick, Paddle};

/// Source of normalized control points (camera + landmark detector)
pub trait Tracker {
    /// Latest control point, or `None` if no face was found this frame
    fn poll(&mut self) -> Option<Vec2>;

    /// False once the underlying device is gone for good
    fn is_available(&self) -> bool {
        true
    }
}

/// Replays a fixed sequence of samples, then reports no face
#[derive(Debug, Clone, Default)]
pub struct ScriptedTracker {
    samples: VecDeque<Option<Vec2>>,
}

impl ScriptedTracker {
    pub fn new(samples: impl IntoIterator<Item = Option<Vec2>>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }
}

impl Tracker for ScriptedTracker {
    fn poll(&mut self) -> Option<Vec2> {
        self.samples.pop_front().flatten()
    }
}

/// Smooths tracker samples and remembers tracker health
#[derive(Debug, Clone)]
pub struct InputAdapter {
    /// Weight of each new sample
    smoothing: f32,
    last: Vec2,
    degraded: bool,
}

impl InputAdapter {
    pub fn new(smoothing: f32) -> Self {
        Self {
            smoothing,
            last: Vec2::new(INPUT_REST_POINT.0, INPUT_REST_POINT.1),
            degraded: false,
        }
    }

    /// Poll the tracker once; never blocks
    ///
    /// Returns the smoothed control point, or `None` when the tracker has no
    /// face this frame or is unavailable.
    pub fn sample(&mut self, tracker: &mut dyn Tracker) -> Option<Vec2> {
        if !tracker.is_available() {
            if !self.degraded {
                log::warn!("Tracker unavailable, paddle frozen");
                self.degraded = true;
            }
            return None;
        }
        if self.degraded {
            log::info!("Tracker recovered");
            self.degraded = false;
        }

        let raw = tracker.poll()?.clamp(Vec2::ZERO, Vec2::ONE);
        self.last = Vec2::new(
            lerp(self.last.x, raw.x, self.smoothing),
            lerp(self.last.y, raw.y, self.smoothing),
        );
        Some(self.last)
    }

    /// Whether the tracker has been reported unavailable
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

/// Unclamped paddle top-left that centres the paddle on the control point
pub fn paddle_target(point: Vec2, config: &GameConfig) -> Vec2 {
    Vec2::new(
        point.x * config.screen_width - config.paddle_width / 2.0,
        point.y * config.screen_height - config.paddle_height / 2.0,
    )
}

/// Move the paddle toward a control point
///
/// The target is clamped into the paddle's band. With
/// `PaddleMovement::BrickBlocked` a move that would overlap any live brick is
/// dropped entirely. Returns whether the paddle moved.
pub fn move_paddle(
    paddle: &mut Paddle,
    point: Vec2,
    bricks: &[Brick],
    config: &GameConfig,
) -> bool {
    let (min, max) = config.paddle_bounds();
    let target = paddle_target(point, config).clamp(min, max);

    if config.paddle_movement == PaddleMovement::BrickBlocked {
        let rect = paddle.rect_at(target);
        if bricks.iter().any(|b| b.rect.intersects(&rect)) {
            return false;
        }
    }

    paddle.pos = target;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::board::build_board;
    use crate::sim::rect::Rect;

    struct DeadCamera;

    impl Tracker for DeadCamera {
        fn poll(&mut self) -> Option<Vec2> {
            Some(Vec2::splat(0.5))
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_paddle_target_reference_point() {
        let config = GameConfig::default();
        let target = paddle_target(Vec2::new(0.5, 0.7), &config);
        assert_eq!(target.x, 250.0);
        assert_eq!(target.y, 0.7 * 480.0 - 9.0);
    }

    #[test]
    fn test_move_clamps_to_band() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(&config);

        assert!(move_paddle(&mut paddle, Vec2::new(1.0, 1.0), &[], &config));
        assert_eq!(paddle.pos, Vec2::new(500.0, 452.0));

        assert!(move_paddle(&mut paddle, Vec2::new(0.0, 0.0), &[], &config));
        assert_eq!(paddle.pos, Vec2::new(0.0, 180.0));
    }

    #[test]
    fn test_free_movement_ignores_bricks() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(&config);
        let bricks = vec![Brick {
            rect: Rect::new(0.0, 170.0, 640.0, 40.0),
            color: 0,
        }];
        assert!(move_paddle(&mut paddle, Vec2::new(0.5, 0.0), &bricks, &config));
        assert_eq!(paddle.pos.y, 180.0);
    }

    #[test]
    fn test_brick_blocked_rejects_whole_move() {
        let config = GameConfig {
            paddle_movement: PaddleMovement::BrickBlocked,
            ..Default::default()
        };
        let mut paddle = Paddle::new(&config);
        let start = paddle.pos;
        // Level 3 grid reaches y = 212, below the top of the paddle band
        let bricks = build_board(3, &config.board, config.screen()).unwrap();

        assert!(!move_paddle(&mut paddle, Vec2::new(0.5, 0.0), &bricks, &config));
        assert_eq!(paddle.pos, start);

        // Lower in the band is clear
        assert!(move_paddle(&mut paddle, Vec2::new(0.2, 0.8), &bricks, &config));
        assert_ne!(paddle.pos, start);
    }

    #[test]
    fn test_smoothing() {
        let mut adapter = InputAdapter::new(0.35);
        let mut tracker = ScriptedTracker::new([Some(Vec2::new(1.0, 0.7)), None]);

        let first = adapter.sample(&mut tracker).unwrap();
        assert!((first.x - 0.675).abs() < 1e-6);
        assert!((first.y - 0.7).abs() < 1e-6);

        // Lost face: no sample, not an error
        assert_eq!(adapter.sample(&mut tracker), None);
        assert!(!adapter.is_degraded());
    }

    #[test]
    fn test_out_of_range_samples_clamped() {
        let mut adapter = InputAdapter::new(1.0);
        let mut tracker = ScriptedTracker::new([Some(Vec2::new(1.4, -0.2))]);
        assert_eq!(adapter.sample(&mut tracker), Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_unavailable_tracker_degrades() {
        let mut adapter = InputAdapter::new(0.35);
        let mut camera = DeadCamera;
        assert_eq!(adapter.sample(&mut camera), None);
        assert!(adapter.is_degraded());
        assert_eq!(adapter.sample(&mut camera), None);
    }
}
