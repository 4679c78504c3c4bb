//! Game state and core simulation types
//!
//! Everything the tick mutates lives in `GameState`. Sizes are in cells;
//! `glyph_width` converts glyph counts into cells for the active glyph set.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::bounce_direction;
use super::field::PlayField;
use super::rect::Rect;
use crate::consts::*;
use crate::error::Result;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused, ticks do nothing
    Paused,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Direction applied on the last tick (x in -1..=1)
    pub dir: IVec2,
    pub min_width: i32,
    pub max_width: i32,
}

impl Paddle {
    /// Paddle centred on the last inner row
    pub fn new(field: &PlayField, glyph_width: i32) -> Self {
        let w = (MIN_PADDLE_GLYPHS + MAX_PADDLE_GLYPHS) / 2 * glyph_width;
        let x = field.inner.x + (field.inner.w - w) / 2;
        Self {
            rect: Rect::new(x, field.bottom(), w, 1),
            dir: IVec2::ZERO,
            min_width: MIN_PADDLE_GLYPHS * glyph_width,
            max_width: MAX_PADDLE_GLYPHS * glyph_width,
        }
    }

    /// Keep the paddle inside the inner rectangle on both sides
    pub fn clamp_to(&mut self, field: &PlayField) {
        if self.rect.x < field.left() {
            self.rect.x = field.left();
        }
        if self.rect.right() > field.right() {
            self.rect.x = field.right() - self.rect.w + 1;
        }
    }

    pub fn widen(&mut self) {
        self.rect.w = (self.rect.w + PADDLE_STEP).min(self.max_width);
    }

    pub fn shrink(&mut self) {
        self.rect.w = (self.rect.w - PADDLE_STEP).max(self.min_width);
    }
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Per-tick displacement, each axis in -1..=1
    pub dir: IVec2,
    /// False while the ball rides on the paddle waiting for launch
    pub launched: bool,
    /// Set once the ball has bounced off a brick or the paddle this tick
    #[serde(skip)]
    pub bounced: bool,
}

impl Ball {
    /// New unlaunched ball sitting on the paddle
    pub fn tracking(paddle: &Rect, glyph_width: i32) -> Self {
        let mut ball = Self {
            rect: Rect::new(0, 0, glyph_width, 1),
            dir: IVec2::ZERO,
            launched: false,
            bounced: false,
        };
        ball.track(paddle);
        ball
    }

    /// Follow the paddle centre, one row above it
    pub fn track(&mut self, paddle: &Rect) {
        self.rect.x = paddle.x + paddle.w / 2 - self.rect.w / 2;
        self.rect.y = paddle.y - 1;
    }

    /// Send the ball upward with horizontal component `dx`
    pub fn launch(&mut self, dx: i32) {
        self.launched = true;
        self.dir = IVec2::new(dx.clamp(-1, 1), -1);
    }

    /// Zone-based bounce off `target`: horizontal from the zone hit, vertical inverted
    pub fn bounce_off(&mut self, target: &Rect) {
        self.dir = bounce_direction(self.dir, &self.rect, target);
        self.bounced = true;
    }
}

/// Power-up kinds carried by bricks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropKind {
    /// Widens the paddle
    Health,
    /// Adds an unlaunched ball
    ExtraBall,
    /// Shrinks the paddle
    Bomb,
}

/// Drop lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropState {
    /// Attached to a live brick
    Dormant,
    /// Released, moving down one row per tick
    Falling,
    /// Caught by the paddle, effect applied
    Consumed,
    /// Fell out of the play field
    Expired,
}

/// A power-up attached to a brick, released when the brick breaks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropItem {
    pub kind: DropKind,
    pub rect: Rect,
    pub state: DropState,
    /// Released this tick; drawn at the spawn row before it starts falling
    #[serde(default)]
    pub fresh: bool,
}

impl DropItem {
    /// Dormant drop positioned just below the middle of `brick`
    pub fn new(kind: DropKind, brick: &Rect, glyph_width: i32) -> Self {
        Self {
            kind,
            rect: Rect::new(brick.center_x(), brick.y + brick.h, glyph_width, 1),
            state: DropState::Dormant,
            fresh: false,
        }
    }

    /// True once released (any state but Dormant)
    pub fn is_spawned(&self) -> bool {
        self.state != DropState::Dormant
    }

    /// True while falling
    pub fn is_live(&self) -> bool {
        self.state == DropState::Falling
    }

    /// Dormant -> Falling. Returns false if the drop was already released.
    pub fn activate(&mut self) -> bool {
        if self.state == DropState::Dormant {
            self.state = DropState::Falling;
            self.fresh = true;
            true
        } else {
            false
        }
    }
}

/// A brick in the level grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// 3 strong, 2 medium, 1 weak, 0 destroyed
    pub health: u8,
    pub drop: Option<DropItem>,
}

impl Brick {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Take one hit. Returns true if this hit destroyed the brick.
    pub fn hit(&mut self) -> bool {
        if self.health == 0 {
            return false;
        }
        self.health -= 1;
        self.health == 0
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub field: PlayField,
    /// Display width of one glyph, in cells
    pub glyph_width: i32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    /// Active balls, in spawn order
    pub balls: Vec<Ball>,
    /// Level bricks, row-major
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Create a state with one unlaunched ball and no bricks
    pub fn new(field: PlayField, glyph_width: i32, seed: u64) -> Self {
        let paddle = Paddle::new(&field, glyph_width);
        let ball = Ball::tracking(&paddle.rect, glyph_width);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field,
            glyph_width,
            phase: GamePhase::Playing,
            time_ticks: 0,
            paddle,
            balls: vec![ball],
            bricks: Vec::new(),
        }
    }

    /// Append an unlaunched ball tracking the paddle
    pub fn spawn_ball_tracking(&mut self) -> Result<()> {
        self.balls.try_reserve(1)?;
        self.balls
            .push(Ball::tracking(&self.paddle.rect, self.glyph_width));
        Ok(())
    }

    /// Bricks still standing
    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }

    /// Drops currently falling
    pub fn live_drops(&self) -> impl Iterator<Item = &DropItem> {
        self.bricks
            .iter()
            .filter_map(|b| b.drop.as_ref())
            .filter(|d| d.is_live())
    }
}
