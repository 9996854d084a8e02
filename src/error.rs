//! Configuration errors
//!
//! Raised when loading or validating a `GameConfig` and when a board layout
//! cannot produce valid geometry. The simulation itself never fails.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// Screen width or height is not positive
    DegenerateScreen { width: f32, height: f32 },
    /// Paddle width or height is not positive
    DegeneratePaddle { width: f32, height: f32 },
    /// Paddle vertical band is empty or lies outside the screen
    EmptyPaddleBand { min_y: f32, max_y: f32 },
    /// Paddle is wider than the screen
    PaddleTooWide { width: f32, screen_width: f32 },
    BallRadius { radius: f32 },
    BallSpeed { base: f32, per_level: f32 },
    LaunchArc { arc: f32 },
    Smoothing { factor: f32 },
    NoLives,
    NoLevels,
    EmptyPalette,
    NoColumns,
    NoRows { level: u32 },
    /// Computed brick width is zero or negative
    BrickWidth { cell_width: f32, gap: f32 },
    BrickHeight { height: f32 },
    /// Spacing between bricks is negative
    BrickGap { gap: f32 },
    /// Grid origin lies above or left of the screen
    BoardOrigin { margin_x: f32, top: f32 },
    /// Row and column counts multiply past the brick limit
    TooManyBricks { rows: u32, columns: u32 },
    /// Brick grid extends past the bottom of the screen
    BoardOverflow { bottom: f32, screen_height: f32 },
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateScreen { width, height } => {
                write!(f, "screen size must be positive, got {width}x{height}")
            }
            Self::DegeneratePaddle { width, height } => {
                write!(f, "paddle size must be positive, got {width}x{height}")
            }
            Self::EmptyPaddleBand { min_y, max_y } => {
                write!(f, "paddle band is empty: min_y {min_y} > max_y {max_y}")
            }
            Self::PaddleTooWide {
                width,
                screen_width,
            } => write!(f, "paddle width {width} exceeds screen width {screen_width}"),
            Self::BallRadius { radius } => write!(f, "ball radius must be positive, got {radius}"),
            Self::BallSpeed { base, per_level } => write!(
                f,
                "ball speed must be positive at level 1, got base {base} + {per_level}/level"
            ),
            Self::LaunchArc { arc } => {
                write!(f, "launch arc must be within [0, pi/2), got {arc}")
            }
            Self::Smoothing { factor } => {
                write!(f, "input smoothing must be within (0, 1], got {factor}")
            }
            Self::NoLives => write!(f, "starting lives must be at least 1"),
            Self::NoLevels => write!(f, "max level must be at least 1"),
            Self::EmptyPalette => write!(f, "brick palette is empty"),
            Self::NoColumns => write!(f, "brick grid needs at least one column"),
            Self::NoRows { level } => write!(f, "brick grid has no rows at level {level}"),
            Self::BrickWidth { cell_width, gap } => write!(
                f,
                "brick width is not positive (cell width {cell_width}, gap {gap})"
            ),
            Self::BrickHeight { height } => {
                write!(f, "brick height must be positive, got {height}")
            }
            Self::BrickGap { gap } => write!(f, "brick gap must not be negative, got {gap}"),
            Self::BoardOrigin { margin_x, top } => write!(
                f,
                "brick grid origin must be on screen, got margin {margin_x}, top {top}"
            ),
            Self::TooManyBricks { rows, columns } => {
                write!(f, "brick grid of {rows}x{columns} is too large")
            }
            Self::BoardOverflow {
                bottom,
                screen_height,
            } => write!(
                f,
                "brick grid bottom {bottom} is below screen height {screen_height}"
            ),
            Self::Io(e) => write!(f, "failed to read config: {e}"),
            Self::Json(e) => write!(f, "failed to parse config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
