//! Fixed timestep simulation tick
//!
//! Advances physics only in `Playing`. Every other phase is a pause that waits
//! for a control signal, so presentation can show its message screen while the
//! outer loop keeps running.

use super::collision::{
    BounceAxis, ball_lost, ball_side_wall_collision, ball_top_wall_collision, brick_bounce_axis,
    circle_intersects_rect, paddle_deflection, reflect_velocity,
};
use super::state::{FloatingText, GameEvent, GamePhase, GameState};
use crate::config::Deflection;
use crate::consts::*;
use crate::input::move_paddle;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Smoothed control point from the tracker, `None` when no face is seen
    pub control: Option<glam::Vec2>,
    /// Start / continue (edge-triggered)
    pub start: bool,
    /// Restart after game over or win (edge-triggered)
    pub restart: bool,
    /// Leave the game
    pub quit: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.quit && !state.quit {
        log::info!("Quit requested at {}", state.hud_line());
        state.quit = true;
        state.events.push(GameEvent::Quit);
    }
    if state.quit {
        return;
    }

    match state.phase {
        GamePhase::Idle | GamePhase::LevelClear => {
            if input.start {
                log::info!("Level {} started", state.level);
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Started);
            }
        }

        GamePhase::GameOver | GamePhase::Won => {
            if input.restart {
                state.reset_session();
                state.phase = GamePhase::Idle;
                state.events.push(GameEvent::Restarted);
            }
        }

        GamePhase::Playing => step(state, input, dt),
    }
}

/// One step of active play
fn step(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // No control point holds the paddle where it is
    if let Some(point) = input.control {
        move_paddle(&mut state.paddle, point, &state.bricks, &state.config);
    }

    state.ball.integrate(dt);

    resolve_walls(state);
    resolve_paddle(state);
    resolve_bricks(state);

    for text in &mut state.texts {
        text.update();
    }
    state.texts.retain(FloatingText::is_alive);

    if ball_lost(state.ball.pos, state.ball.radius, state.config.screen_height) {
        lose_ball(state);
        if state.phase == GamePhase::GameOver {
            return;
        }
    }

    // Also runs after a paused life loss, so the board never sits empty
    if state.bricks.is_empty() {
        clear_level(state);
    }
}

fn resolve_walls(state: &mut GameState) {
    let ball = &mut state.ball;

    let side = ball_side_wall_collision(ball.pos, ball.radius, state.config.screen_width);
    if side.hit {
        ball.pos += side.normal * side.penetration;
        if ball.vel.dot(side.normal) < 0.0 {
            ball.vel = reflect_velocity(ball.vel, side.normal);
            state.events.push(GameEvent::WallBounce);
        }
    }

    let top = ball_top_wall_collision(ball.pos, ball.radius);
    if top.hit {
        ball.pos += top.normal * top.penetration;
        if ball.vel.dot(top.normal) < 0.0 {
            ball.vel = reflect_velocity(ball.vel, top.normal);

            // Break up vertical loops: steer away from the last brick hit
            if state.config.top_bounce_nudge {
                if let Some(hit) = state.last_brick_hit {
                    let speed = ball.speed();
                    ball.vel.x += (ball.pos.x - hit.x) * TOP_NUDGE_FACTOR;
                    ball.vel = ball.vel.normalize_or_zero() * speed;
                }
            }
            state.events.push(GameEvent::WallBounce);
        }
    }
}

fn resolve_paddle(state: &mut GameState) {
    let rect = state.paddle.rect();
    let ball = &mut state.ball;

    // Only a descending ball can hit the paddle
    if ball.vel.y <= 0.0 || !circle_intersects_rect(ball.pos, ball.radius, &rect) {
        return;
    }

    match state.config.deflection {
        Deflection::Angled => {
            ball.vel = paddle_deflection(ball.pos.x, &rect, ball.speed(), MAX_DEFLECTION);
        }
        Deflection::Vertical => {
            ball.vel.y = -ball.vel.y.abs();
        }
    }
    // Sit above the paddle so the hit doesn't retrigger
    ball.pos.y = rect.top() - ball.radius - 1.0;
    state.events.push(GameEvent::PaddleHit);
}

/// Destroy at most one brick: the first one touched in grid order
fn resolve_bricks(state: &mut GameState) {
    let ball = &mut state.ball;
    let Some(index) = state
        .bricks
        .iter()
        .position(|b| circle_intersects_rect(ball.pos, ball.radius, &b.rect))
    else {
        return;
    };

    let brick = state.bricks.remove(index);
    match brick_bounce_axis(ball.pos, &brick.rect) {
        BounceAxis::X => ball.vel.x = -ball.vel.x,
        BounceAxis::Y => ball.vel.y = -ball.vel.y,
    }

    let center = brick.rect.center();
    let points = state.config.brick_reward;
    state.score += points;
    state.texts.push(FloatingText::new(
        center,
        format!("+{points}"),
        state.config.floating_text_life,
    ));
    state.last_brick_hit = Some(center);
    state.events.push(GameEvent::BrickDestroyed { center, points });
    log::debug!(
        "Brick at ({}, {}) destroyed, {} left, score {}",
        center.x,
        center.y,
        state.bricks.len(),
        state.score
    );
}

fn lose_ball(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::BallLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        log::info!("Game over: {}", state.hud_line());
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        return;
    }

    log::info!("Ball lost, {} lives left", state.lives);
    state.reset_ball();
    if state.config.pause_on_life_lost {
        state.phase = GamePhase::Idle;
    }
}

fn clear_level(state: &mut GameState) {
    if state.level >= state.config.max_level {
        log::info!("All {} levels cleared: {}", state.config.max_level, state.hud_line());
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won { score: state.score });
        return;
    }

    state.level += 1;
    log::info!("Board cleared, advancing to level {}", state.level);
    state.start_level();
    state.phase = GamePhase::LevelClear;
    state.events.push(GameEvent::LevelCleared {
        next_level: state.level,
    });
}
