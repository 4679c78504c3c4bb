//! Fixed tick simulation step
//!
//! One call to `tick` advances the game by one frame. Steps run in a fixed
//! order: launch, paddle move and clamp, brick collisions, wall bounds, ball
//! movement with paddle bounce, paddle tracking and lost-ball pruning, drops.

use rand::Rng;

use super::field::{PlayField, brick_row_offset};
use super::rect::Rect;
use super::state::{Brick, DropItem, DropKind, DropState, GamePhase, GameState};
use crate::consts::*;
use crate::error::Result;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Paddle direction for this tick only (-1, 0, +1)
    pub paddle_dir: i32,
    /// Launch every ball still riding the paddle
    pub launch: bool,
    /// Pause toggle
    pub pause: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub bricks_destroyed: u32,
    pub drops_spawned: u32,
    pub drops_consumed: u32,
    pub drops_expired: u32,
    pub balls_lost: u32,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<TickReport> {
    if input.pause {
        state.phase = match state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
        };
        log::debug!("Phase -> {:?}", state.phase);
    }

    let mut report = TickReport::default();
    if state.phase == GamePhase::Paused {
        return Ok(report);
    }

    state.time_ticks += 1;
    for ball in &mut state.balls {
        ball.bounced = false;
    }

    if input.launch {
        launch_balls(state);
    }

    move_paddle(state, input.paddle_dir);
    resolve_brick_collisions(state, &mut report);
    keep_balls_within_bounds(state);
    move_balls(state);
    track_and_prune_balls(state, &mut report);
    advance_drops(state, &mut report)?;

    Ok(report)
}

fn launch_balls(state: &mut GameState) {
    for ball in state.balls.iter_mut().filter(|b| !b.launched) {
        let dx = state.rng.random_range(-1..=1);
        ball.launch(dx);
        log::debug!("Ball launched with dx={}", dx);
    }
}

fn move_paddle(state: &mut GameState, dir: i32) {
    let dir = dir.clamp(-1, 1);
    state.paddle.dir.x = dir;
    state.paddle.rect.x += dir;
    state.paddle.clamp_to(&state.field);
}

/// Each launched ball bounces off at most one live brick per tick
fn resolve_brick_collisions(state: &mut GameState, report: &mut TickReport) {
    for ball in state.balls.iter_mut().filter(|b| b.launched) {
        let Some(brick) = state
            .bricks
            .iter_mut()
            .find(|brick| brick.is_alive() && brick.rect.overlaps(&ball.rect))
        else {
            continue;
        };

        ball.bounce_off(&brick.rect);
        if brick.hit() {
            report.bricks_destroyed += 1;
            log::debug!("Brick at ({}, {}) destroyed", brick.rect.x, brick.rect.y);

            if let Some(drop) = brick.drop.as_mut()
                && drop.activate()
            {
                report.drops_spawned += 1;
                log::debug!("{:?} drop released", drop.kind);
            }
        }
    }
}

/// Side walls flip horizontal direction, the top wall flips vertical direction.
/// The bottom is open: balls that reach it are pruned instead.
fn keep_balls_within_bounds(state: &mut GameState) {
    let field = &state.field;
    for ball in state.balls.iter_mut().filter(|b| b.launched) {
        let heading_left = ball.dir.x < 0 && ball.rect.x <= field.left();
        let heading_right = ball.dir.x > 0 && ball.rect.right() >= field.right();
        if heading_left || heading_right {
            ball.dir.x = -ball.dir.x;
        }

        if ball.dir.y < 0 && ball.rect.y <= field.top() {
            ball.dir.y = -ball.dir.y;
        }
    }
}

fn move_balls(state: &mut GameState) {
    let paddle = state.paddle.rect;
    for ball in state.balls.iter_mut().filter(|b| b.launched) {
        ball.rect.x += ball.dir.x;
        ball.rect.y += ball.dir.y;

        // One bounce per tick: a ball that just left a brick ignores the paddle
        if !ball.bounced && ball.rect.overlaps(&paddle) {
            ball.bounce_off(&paddle);
        }
    }
}

fn track_and_prune_balls(state: &mut GameState, report: &mut TickReport) {
    let paddle = state.paddle.rect;
    let bottom = state.field.bottom();

    for ball in state.balls.iter_mut().filter(|b| !b.launched) {
        ball.track(&paddle);
    }

    let before = state.balls.len();
    state.balls.retain(|ball| ball.rect.y < bottom);
    let lost = before - state.balls.len();
    if lost > 0 {
        report.balls_lost += lost as u32;
        log::debug!("{} ball(s) lost, {} left", lost, state.balls.len());
    }
}

fn advance_drops(state: &mut GameState, report: &mut TickReport) -> Result<()> {
    let paddle = state.paddle.rect;
    let floor = state.field.inner.y + state.field.inner.h;

    // Effects are applied after the walk so the bricks aren't borrowed
    let mut collected: Vec<DropKind> = Vec::new();

    for drop in state
        .bricks
        .iter_mut()
        .filter_map(|b| b.drop.as_mut())
        .filter(|d| d.is_live())
    {
        // Stays on its spawn row for the frame it was released
        if drop.fresh {
            drop.fresh = false;
            continue;
        }
        drop.rect.y += 1;

        if drop.rect.y >= floor {
            drop.state = DropState::Expired;
            report.drops_expired += 1;
            log::debug!("{:?} drop expired", drop.kind);
        } else if drop.rect.overlaps(&paddle) {
            drop.state = DropState::Consumed;
            report.drops_consumed += 1;
            collected.push(drop.kind);
        }
    }

    for kind in collected {
        apply_drop(state, kind)?;
    }
    Ok(())
}

/// Apply a collected drop's effect
pub fn apply_drop(state: &mut GameState, kind: DropKind) -> Result<()> {
    match kind {
        DropKind::Health => {
            state.paddle.widen();
            state.paddle.clamp_to(&state.field);
        }
        DropKind::ExtraBall => state.spawn_ball_tracking()?,
        DropKind::Bomb => state.paddle.shrink(),
    }

    // Balls waiting on the paddle follow its new width
    let paddle = state.paddle.rect;
    for ball in state.balls.iter_mut().filter(|b| !b.launched) {
        ball.track(&paddle);
    }
    log::debug!(
        "{:?} collected: paddle width {}, {} ball(s)",
        kind,
        state.paddle.rect.w,
        state.balls.len()
    );
    Ok(())
}

/// Fill the level with the fixed brick grid.
///
/// Health and drop kind are rolled from the state's seeded RNG: health is
/// uniform in 1..=3, and a brick carries no drop, Health, ExtraBall or Bomb
/// with equal odds.
pub fn generate_bricks(state: &mut GameState) {
    let glyph_width = state.glyph_width;
    let inner = state.field.inner;
    let brick_width = brick_width(&state.field, glyph_width);

    state.bricks.clear();
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            let rect = Rect::new(
                inner.x + col * (brick_width + BRICK_H_GAP),
                inner.y + brick_row_offset(row),
                brick_width,
                1,
            );
            let health = state.rng.random_range(1..=BRICK_MAX_HEALTH);
            let kind = match state.rng.random_range(0..4) {
                0 => None,
                1 => Some(DropKind::Health),
                2 => Some(DropKind::ExtraBall),
                _ => Some(DropKind::Bomb),
            };
            state.bricks.push(Brick {
                rect,
                health,
                drop: kind.map(|k| DropItem::new(k, &rect, glyph_width)),
            });
        }
    }

    log::info!(
        "Level generated: {} bricks ({} wide), {} carrying drops",
        state.bricks.len(),
        brick_width,
        state.bricks.iter().filter(|b| b.drop.is_some()).count()
    );
}

/// Brick width in cells: the inner width minus gaps, split evenly across the
/// columns and rounded down to whole glyphs
fn brick_width(field: &PlayField, glyph_width: i32) -> i32 {
    let usable = field.inner.w - (BRICK_COLS - 1) * BRICK_H_GAP;
    (usable / BRICK_COLS) / glyph_width * glyph_width
}
