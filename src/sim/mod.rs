//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (grid order for bricks)
//! - No rendering, camera or platform dependencies

pub mod board;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use board::build_board;
pub use collision::{CollisionResult, circle_intersects_rect};
pub use rect::Rect;
pub use state::{Ball, Brick, FloatingText, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
