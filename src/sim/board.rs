//! Brick grid generation
//!
//! Boards are a pure function of the level and layout: no randomness, so the
//! same level always produces the same bricks in the same order.

use glam::Vec2;

use super::rect::Rect;
use super::state::Brick;
use crate::config::BoardLayout;
use crate::error::ConfigError;

/// Build the bricks for `level`, row by row, left to right
pub fn build_board(
    level: u32,
    layout: &BoardLayout,
    screen: Vec2,
) -> Result<Vec<Brick>, ConfigError> {
    if layout.columns == 0 {
        return Err(ConfigError::NoColumns);
    }
    if layout.palette.is_empty() {
        return Err(ConfigError::EmptyPalette);
    }
    if !(layout.brick_height > 0.0) {
        return Err(ConfigError::BrickHeight {
            height: layout.brick_height,
        });
    }
    if !(layout.gap >= 0.0) {
        return Err(ConfigError::BrickGap { gap: layout.gap });
    }
    if !(layout.margin_x >= 0.0 && layout.top >= 0.0) {
        return Err(ConfigError::BoardOrigin {
            margin_x: layout.margin_x,
            top: layout.top,
        });
    }

    let rows = layout.row_mode.rows_for_level(level);
    if rows == 0 {
        return Err(ConfigError::NoRows { level });
    }
    let count = rows
        .checked_mul(layout.columns)
        .ok_or(ConfigError::TooManyBricks {
            rows,
            columns: layout.columns,
        })?;

    let cell_width = ((screen.x - 2.0 * layout.margin_x) / layout.columns as f32).floor();
    let brick_width = cell_width - layout.gap;
    if !(brick_width > 0.0) {
        return Err(ConfigError::BrickWidth {
            cell_width,
            gap: layout.gap,
        });
    }

    // Flooring the cell width keeps the last column inside `screen.x - margin_x`
    let pitch = layout.brick_height + layout.gap;
    let bottom = layout.top + (rows - 1) as f32 * pitch + layout.brick_height;
    if bottom > screen.y {
        return Err(ConfigError::BoardOverflow {
            bottom,
            screen_height: screen.y,
        });
    }

    let mut bricks = Vec::with_capacity(count as usize);
    for row in 0..rows {
        for col in 0..layout.columns {
            let x = layout.margin_x + col as f32 * cell_width;
            let y = layout.top + row as f32 * pitch;
            bricks.push(Brick {
                rect: Rect::new(x, y, brick_width, layout.brick_height),
                color: (row as usize + col as usize) % layout.palette.len(),
            });
        }
    }

    log::debug!(
        "Built level {} board: {}x{} bricks, cell width {}",
        level,
        rows,
        layout.columns,
        cell_width
    );
    Ok(bricks)
}
