//! Nose Pong entry point
//!
//! Headless native runner. Drives the simulation at a fixed rate with an
//! autopilot tracker standing in for the camera, acknowledging message
//! screens automatically, and logs the HUD as it goes.
//!
//! Usage: `nose-pong [config.json]` (or set `NOSE_PONG_CONFIG`).
//! `NOSE_PONG_FRAMES` bounds the run (default 3600 frames).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use glam::Vec2;

use nose_pong::consts::*;
use nose_pong::input::{InputAdapter, Tracker};
use nose_pong::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use nose_pong::{ConfigError, GameConfig};

const DEFAULT_FRAMES: u64 = 3600;

/// Follows the ball horizontally, like a player chasing it with their nose
#[derive(Default)]
struct BallFollower {
    target: Option<Vec2>,
}

impl BallFollower {
    fn observe(&mut self, state: &GameState) {
        let screen = state.config.screen();
        let ball = &state.ball;
        // Lead the ball a little in its direction of travel
        let lead = ball.pos.x + ball.vel.x * 0.1;
        self.target = Some(Vec2::new(lead / screen.x, 0.85));
    }
}

impl Tracker for BallFollower {
    fn poll(&mut self) -> Option<Vec2> {
        self.target.take()
    }
}

/// Game instance holding all state
struct Game {
    state: GameState,
    adapter: InputAdapter,
    tracker: BallFollower,
    input: TickInput,
    accumulator: f32,
}

impl Game {
    fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let adapter = InputAdapter::new(config.input_smoothing);
        let state = GameState::new(config)?;
        Ok(Self {
            state,
            adapter,
            tracker: BallFollower::default(),
            input: TickInput {
                start: true,
                ..Default::default()
            },
            accumulator: 0.0,
        })
    }

    /// Run simulation ticks for one frame; returns false once the game has quit
    fn update(&mut self, dt: f32) -> bool {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        // One tracker sample per frame
        self.tracker.observe(&self.state);
        self.input.control = self.adapter.sample(&mut self.tracker);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.start = false;
            self.input.restart = false;
            self.input.quit = false;

            self.handle_events();
        }

        !self.state.quit
    }

    /// Log events and answer the message screens
    fn handle_events(&mut self) {
        for event in &self.state.events {
            match event {
                GameEvent::BallLost { lives_left } => {
                    log::info!("Ball lost ({} left)", lives_left)
                }
                GameEvent::LevelCleared { next_level } => {
                    log::info!("LEVEL {} - press start to continue", next_level)
                }
                GameEvent::GameOver { score } => log::info!("GAME OVER - score {}", score),
                GameEvent::Won { score } => log::info!("YOU WIN - score {}", score),
                _ => {}
            }
        }

        match self.state.phase {
            GamePhase::Idle | GamePhase::LevelClear => self.input.start = true,
            GamePhase::GameOver | GamePhase::Won => self.input.quit = true,
            GamePhase::Playing => {}
        }
    }
}

fn load_config() -> Result<GameConfig, ConfigError> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NOSE_PONG_CONFIG").ok());

    match path {
        Some(path) => GameConfig::load(&PathBuf::from(path)),
        None => {
            log::info!("Using default config");
            Ok(GameConfig::default())
        }
    }
}

fn run() -> Result<(), ConfigError> {
    let config = load_config()?;
    let frames = std::env::var("NOSE_PONG_FRAMES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut game = Game::new(config)?;
    let frame_time = Duration::from_secs_f32(SIM_DT);
    let mut last_time = Instant::now();

    for frame in 0..frames {
        let now = Instant::now();
        let dt = (now - last_time).as_secs_f32();
        last_time = now;

        if !game.update(dt) {
            break;
        }
        if frame % 60 == 0 {
            log::info!("{}", game.state.hud_line());
        }

        let elapsed = now.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    log::info!(
        "Finished in {:?} after {} ticks: {}",
        game.state.phase,
        game.state.time_ticks,
        game.state.hud_line()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
