//! Game state and core simulation types
//!
//! `GameState` is the whole session: it owns every entity and is passed by
//! reference to the simulation step and to whatever draws the frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::build_board;
use super::rect::Rect;
use crate::config::GameConfig;
use crate::consts::*;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start signal (new game, or after a lost ball if configured)
    Idle,
    /// Active gameplay
    Playing,
    /// Board cleared, next level built, waiting for the start signal
    LevelClear,
    /// Out of lives, waiting for the restart signal
    GameOver,
    /// Cleared the final level, waiting for the restart signal
    Won,
}

/// Something that happened during a tick, for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    WallBounce,
    PaddleHit,
    BrickDestroyed { center: Vec2, points: u64 },
    BallLost { lives_left: u8 },
    LevelCleared { next_level: u32 },
    GameOver { score: u64 },
    Won { score: u64 },
    Restarted,
    Quit,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Re-centre the ball and launch it upward at a random angle
    ///
    /// The angle from straight up is drawn uniformly from `[-arc, arc]`.
    pub fn reset(&mut self, center: Vec2, speed: f32, arc: f32, rng: &mut Pcg32) {
        let angle: f32 = rng.random_range(-arc..=arc);
        self.pos = center;
        self.vel = Vec2::new(angle.sin() * speed, -(angle.cos() * speed).abs());
    }

    /// Advance position by one step
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    /// Paddle centred horizontally near the bottom of its band
    pub fn new(config: &GameConfig) -> Self {
        let (min, max) = config.paddle_bounds();
        let pos = Vec2::new(
            config.screen_width / 2.0 - config.paddle_width / 2.0,
            config.screen_height - PADDLE_SPAWN_LIFT,
        );
        Self {
            pos: pos.clamp(min, max),
            size: Vec2::new(config.paddle_width, config.paddle_height),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect_at(self.pos)
    }

    /// The rectangle the paddle would occupy at `pos`
    pub fn rect_at(&self, pos: Vec2) -> Rect {
        Rect::new(pos.x, pos.y, self.size.x, self.size.y)
    }
}

/// A brick entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Index into the configured palette
    pub color: usize,
}

/// A short-lived label, e.g. a score popup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingText {
    pub pos: Vec2,
    pub text: String,
    /// Remaining ticks
    pub life: u32,
}

impl FloatingText {
    pub fn new(pos: Vec2, text: String, life: u32) -> Self {
        Self { pos, text, life }
    }

    /// Drift upward and count down one tick
    pub fn update(&mut self) {
        self.pos.y -= FLOATING_TEXT_RISE;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Launch angle RNG
    pub rng: Pcg32,
    /// Current level (1-based)
    pub level: u32,
    pub lives: u8,
    pub score: u64,
    /// Simulated ticks (pause phases do not count)
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Live bricks in grid order
    pub bricks: Vec<Brick>,
    pub texts: Vec<FloatingText>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    /// Centre of the last destroyed brick (drives the optional top-wall nudge)
    pub last_brick_hit: Option<Vec2>,
    /// Set once a quit signal has been received
    pub quit: bool,
}

impl GameState {
    /// Create a new session in the `Idle` phase
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let bricks = build_board(1, &config.board, config.screen())?;

        let mut state = Self {
            rng: Pcg32::seed_from_u64(config.seed),
            level: 1,
            lives: config.lives,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Idle,
            paddle: Paddle::new(&config),
            ball: Ball::new(config.ball_radius),
            bricks,
            texts: Vec::new(),
            events: Vec::new(),
            last_brick_hit: None,
            quit: false,
            config,
        };
        state.reset_ball();
        Ok(state)
    }

    /// Centre the ball with a fresh launch for the current level
    pub fn reset_ball(&mut self) {
        let speed = self.config.launch_speed(self.level);
        let center = self.config.screen() / 2.0;
        self.ball
            .reset(center, speed, self.config.launch_arc, &mut self.rng);
    }

    /// Build the board for the current level and recreate paddle and ball
    pub fn start_level(&mut self) {
        match build_board(self.level, &self.config.board, self.config.screen()) {
            Ok(bricks) => self.bricks = bricks,
            // Unreachable for a validated config
            Err(e) => {
                log::error!("Failed to build level {}: {}", self.level, e);
                self.bricks.clear();
            }
        }
        self.paddle = Paddle::new(&self.config);
        self.ball = Ball::new(self.config.ball_radius);
        self.reset_ball();
        self.texts.clear();
        self.last_brick_hit = None;
        log::info!(
            "Level {}: {} bricks, ball speed {}",
            self.level,
            self.bricks.len(),
            self.config.launch_speed(self.level)
        );
    }

    /// Back to level 1 with full lives and no score
    pub fn reset_session(&mut self) {
        self.level = 1;
        self.lives = self.config.lives;
        self.score = 0;
        self.start_level();
    }

    /// One-line HUD summary
    pub fn hud_line(&self) -> String {
        format!(
            "Score {}   Lives {}   Level {}",
            self.score, self.lives, self.level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, LIVES);
        assert_eq!(state.score, 0);
        // 3 + level rows of 8
        assert_eq!(state.bricks.len(), 32);
        assert_eq!(state.ball.pos, Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_new_session_rejects_bad_config() {
        let config = GameConfig {
            paddle_width: 0.0,
            ..Default::default()
        };
        assert!(GameState::new(config).is_err());
    }

    #[test]
    fn test_paddle_spawn() {
        let paddle = Paddle::new(&GameConfig::default());
        assert_eq!(paddle.pos, Vec2::new(250.0, 400.0));
        assert_eq!(paddle.rect().right(), 390.0);
    }

    #[test]
    fn test_floating_text_decays() {
        let mut text = FloatingText::new(Vec2::new(10.0, 50.0), "+10".to_string(), 2);
        text.update();
        assert!(text.is_alive());
        assert_eq!(text.pos.y, 49.0);
        text.update();
        assert!(!text.is_alive());
        // Stays at zero
        text.update();
        assert_eq!(text.life, 0);
    }

    #[test]
    fn test_same_seed_same_launch() {
        let a = GameState::new(GameConfig::default()).unwrap();
        let b = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_reset_session() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.level = 3;
        state.lives = 1;
        state.score = 420;
        state.bricks.clear();
        state.reset_session();
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, LIVES);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), 32);
    }

    #[test]
    fn test_hud_line() {
        let state = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(state.hud_line(), "Score 0   Lives 3   Level 1");
    }

    proptest! {
        #[test]
        fn prop_ball_reset_launches_upward_within_arc(seed in any::<u64>(), level in 1u32..4) {
            let config = GameConfig { seed, ..Default::default() };
            let mut state = GameState::new(config).unwrap();
            state.level = level;
            state.reset_ball();

            let ball = &state.ball;
            prop_assert_eq!(ball.pos, Vec2::new(320.0, 240.0));
            prop_assert!(ball.vel.y < 0.0);
            let speed = state.config.launch_speed(level);
            prop_assert!((ball.speed() - speed).abs() <= 1e-3 * speed);
            let angle = ball.vel.x.atan2(-ball.vel.y).abs();
            prop_assert!(angle <= LAUNCH_ARC + 1e-4);
        }
    }
}
