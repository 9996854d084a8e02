//! Game configuration
//!
//! Every tunable of the simulation lives here. Loaded from an optional JSON
//! file; missing fields fall back to the reference game's constants.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::board::build_board;

/// How the ball leaves the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Deflection {
    /// Hit offset from paddle centre steers the ball up to `MAX_DEFLECTION`
    #[default]
    Angled,
    /// Ball is sent straight back up with unchanged horizontal velocity
    Vertical,
}

/// Whether live bricks block the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaddleMovement {
    /// Paddle goes anywhere inside its band
    #[default]
    Free,
    /// Moves that would overlap a live brick are rejected for that frame
    BrickBlocked,
}

/// Row count policy for the brick grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowMode {
    /// `base + level` rows
    Scaled { base: u32 },
    /// Same row count on every level
    Fixed { rows: u32 },
}

impl Default for RowMode {
    fn default() -> Self {
        RowMode::Scaled {
            base: BRICK_BASE_ROWS,
        }
    }
}

impl RowMode {
    pub fn rows_for_level(&self, level: u32) -> u32 {
        match *self {
            RowMode::Scaled { base } => base.saturating_add(level),
            RowMode::Fixed { rows } => rows,
        }
    }
}

/// Brick grid geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    pub columns: u32,
    pub row_mode: RowMode,
    pub brick_height: f32,
    /// Horizontal and vertical spacing between bricks
    pub gap: f32,
    /// Y of the first row
    pub top: f32,
    /// Left offset of the first column (also reserved on the right)
    pub margin_x: f32,
    pub palette: Vec<[u8; 3]>,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            columns: BRICK_COLS,
            row_mode: RowMode::default(),
            brick_height: BRICK_H,
            gap: BRICK_GAP,
            top: BRICK_TOP,
            margin_x: BRICK_MARGIN_X,
            palette: PALETTE.to_vec(),
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Top of the paddle band, measured down from `board.top`
    pub paddle_band_offset: f32,
    /// Gap kept between the paddle and the bottom edge
    pub paddle_bottom_margin: f32,
    pub paddle_movement: PaddleMovement,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ball_speed_per_level: f32,
    /// Half-width of the launch arc around vertical (radians)
    pub launch_arc: f32,
    pub deflection: Deflection,
    /// Nudge the ball sideways on top-wall bounces, away from the last brick hit
    pub top_bounce_nudge: bool,

    // === Bricks ===
    pub board: BoardLayout,
    pub brick_reward: u64,

    // === Session ===
    pub lives: u8,
    pub max_level: u32,
    /// Enter `Idle` after each lost ball instead of serving immediately
    pub pause_on_life_lost: bool,
    /// Score popup lifetime in ticks
    pub floating_text_life: u32,

    // === Input ===
    /// Weight of each new tracker sample (1.0 = no smoothing)
    pub input_smoothing: f32,

    /// RNG seed for launch angles
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_W,
            screen_height: SCREEN_H,

            paddle_width: PADDLE_W,
            paddle_height: PADDLE_H,
            paddle_band_offset: PADDLE_BAND_OFFSET,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,
            paddle_movement: PaddleMovement::Free,

            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,
            ball_speed_per_level: BALL_SPEED_PER_LEVEL,
            launch_arc: LAUNCH_ARC,
            deflection: Deflection::Angled,
            top_bounce_nudge: false,

            board: BoardLayout::default(),
            brick_reward: BRICK_REWARD,

            lives: LIVES,
            max_level: MAX_LEVEL,
            pause_on_life_lost: false,
            floating_text_life: FLOATING_TEXT_LIFE,

            input_smoothing: INPUT_SMOOTHING,

            seed: 0x5eed,
        }
    }
}

impl GameConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Legal range of the paddle's top-left corner as (min, max)
    pub fn paddle_bounds(&self) -> (Vec2, Vec2) {
        let min = Vec2::new(0.0, self.board.top + self.paddle_band_offset);
        let max = Vec2::new(
            self.screen_width - self.paddle_width,
            self.screen_height - self.paddle_height - self.paddle_bottom_margin,
        );
        (min, max)
    }

    /// Ball launch speed for a level (pixels/s)
    pub fn launch_speed(&self, level: u32) -> f32 {
        self.ball_base_speed + self.ball_speed_per_level * level as f32
    }

    /// Reject configurations that would produce invalid geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::DegenerateScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(ConfigError::DegeneratePaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_width > self.screen_width {
            return Err(ConfigError::PaddleTooWide {
                width: self.paddle_width,
                screen_width: self.screen_width,
            });
        }
        let (min, max) = self.paddle_bounds();
        if min.y > max.y || max.y < 0.0 {
            return Err(ConfigError::EmptyPaddleBand {
                min_y: min.y,
                max_y: max.y,
            });
        }
        if !(self.ball_radius > 0.0) {
            return Err(ConfigError::BallRadius {
                radius: self.ball_radius,
            });
        }
        if !(self.launch_speed(1) > 0.0) || self.ball_speed_per_level < 0.0 {
            return Err(ConfigError::BallSpeed {
                base: self.ball_base_speed,
                per_level: self.ball_speed_per_level,
            });
        }
        if !(0.0..std::f32::consts::FRAC_PI_2).contains(&self.launch_arc) {
            return Err(ConfigError::LaunchArc {
                arc: self.launch_arc,
            });
        }
        if !(self.input_smoothing > 0.0 && self.input_smoothing <= 1.0) {
            return Err(ConfigError::Smoothing {
                factor: self.input_smoothing,
            });
        }
        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.max_level == 0 {
            return Err(ConfigError::NoLevels);
        }

        // Row count never shrinks with level, so the last level is the largest board
        build_board(self.max_level, &self.board, self.screen())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_paddle_bounds() {
        let (min, max) = GameConfig::default().paddle_bounds();
        assert_eq!(min, Vec2::new(0.0, 180.0));
        assert_eq!(max, Vec2::new(500.0, 452.0));
    }

    #[test]
    fn test_zero_paddle_width_rejected() {
        let config = GameConfig {
            paddle_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegeneratePaddle { .. })
        ));
    }

    #[test]
    fn test_narrow_screen_rejected() {
        // (20 - 20) / 8 leaves no room for bricks
        let config = GameConfig {
            screen_width: 20.0,
            paddle_width: 10.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BrickWidth { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(
            r#"{ "lives": 5, "deflection": "vertical", "board": { "row_mode": { "fixed": { "rows": 4 } } } }"#,
        )
        .unwrap();
        assert_eq!(config.lives, 5);
        assert_eq!(config.deflection, Deflection::Vertical);
        assert_eq!(config.board.row_mode, RowMode::Fixed { rows: 4 });
        assert_eq!(config.board.columns, BRICK_COLS);
        assert_eq!(config.screen_width, SCREEN_W);
    }

    #[test]
    fn test_invalid_json_fails_validation() {
        let result = GameConfig::from_json(r#"{ "lives": 0 }"#);
        assert!(matches!(result, Err(ConfigError::NoLives)));
    }

    #[test]
    fn test_bad_board_geometry_rejected() {
        let mut config = GameConfig::default();
        config.board.gap = -10.0;
        assert!(matches!(config.validate(), Err(ConfigError::BrickGap { .. })));

        let mut config = GameConfig::default();
        config.board.margin_x = -40.0;
        config.board.top = -30.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoardOrigin { .. })
        ));
    }

    #[test]
    fn test_huge_max_level_fails_fast() {
        // Scaled rows saturate on the last level, one board is checked
        let config = GameConfig {
            max_level: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyBricks { .. })
        ));

        // Fixed rows only need the one board checked
        let mut config = GameConfig {
            max_level: u32::MAX,
            ..Default::default()
        };
        config.board.row_mode = RowMode::Fixed { rows: 5 };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_launch_speed_scales_with_level() {
        let config = GameConfig::default();
        assert_eq!(config.launch_speed(1), 360.0);
        assert_eq!(config.launch_speed(3), 480.0);
    }
}
