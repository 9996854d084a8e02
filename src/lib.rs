//! Nose Pong - A breakout game steered by face tracking
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (physics, collisions, game phases)
//! - `input`: Tracker abstraction and control point to paddle mapping
//! - `config`: Data-driven game configuration
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod input;
pub mod sim;

pub use config::{BoardLayout, Deflection, GameConfig, PaddleMovement, RowMode};
pub use error::ConfigError;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the camera frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Screen dimensions
    pub const SCREEN_W: f32 = 640.0;
    pub const SCREEN_H: f32 = 480.0;

    /// Paddle defaults
    pub const PADDLE_W: f32 = 140.0;
    pub const PADDLE_H: f32 = 18.0;
    /// Paddle band starts this far below the top of the brick field
    pub const PADDLE_BAND_OFFSET: f32 = 120.0;
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    /// Paddle spawns this far above the bottom edge
    pub const PADDLE_SPAWN_LIFT: f32 = 80.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Launch speed at level 0 (pixels/s)
    pub const BALL_BASE_SPEED: f32 = 300.0;
    /// Extra launch speed per level (pixels/s)
    pub const BALL_SPEED_PER_LEVEL: f32 = 60.0;
    /// Half-width of the random launch arc around vertical (radians)
    pub const LAUNCH_ARC: f32 = 0.9;
    /// Maximum paddle deflection from straight up (60 degrees)
    pub const MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_3;
    /// Horizontal nudge per pixel of offset on optional top-wall bounces
    pub const TOP_NUDGE_FACTOR: f32 = 0.5;

    /// Brick grid defaults
    pub const BRICK_COLS: u32 = 8;
    pub const BRICK_BASE_ROWS: u32 = 3;
    pub const BRICK_H: f32 = 22.0;
    pub const BRICK_GAP: f32 = 4.0;
    pub const BRICK_TOP: f32 = 60.0;
    pub const BRICK_MARGIN_X: f32 = 10.0;
    pub const BRICK_REWARD: u64 = 10;

    /// Session defaults
    pub const LIVES: u8 = 3;
    pub const MAX_LEVEL: u32 = 3;

    /// Score popup lifetime (ticks) and rise per tick (pixels)
    pub const FLOATING_TEXT_LIFE: u32 = 30;
    pub const FLOATING_TEXT_RISE: f32 = 1.0;

    /// Exponential smoothing factor applied to tracker samples
    pub const INPUT_SMOOTHING: f32 = 0.35;
    /// Control point assumed before the first tracker sample
    pub const INPUT_REST_POINT: (f32, f32) = (0.5, 0.7);

    /// Brick colours (RGB)
    pub const PALETTE: [[u8; 3]; 5] = [
        [255, 99, 71],
        [255, 215, 0],
        [135, 206, 235],
        [218, 112, 214],
        [144, 238, 144],
    ];
}

/// Restrict `v` to `[lo, hi]`
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// Linear interpolation from `a` to `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert!((lerp(0.5, 1.0, 0.35) - 0.675).abs() < 1e-6);
    }
}
