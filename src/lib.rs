//! Brickout - a terminal breakout game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, game state, tick)
//! - `renderer`: Render/input adapter and the crossterm terminal backend
//! - `game`: Start menu and fixed-tick game loop
//! - `settings`: Tick rate, glyph set and seed
//! - `error`: Fatal error conditions

pub mod error;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, Result};
pub use settings::{GlyphSet, Settings};

/// Game configuration constants
pub mod consts {
    /// Default tick rate (ticks per second)
    pub const DEFAULT_TICK_RATE_HZ: u32 = 24;
    /// Tick rate bounds accepted from settings
    pub const MIN_TICK_RATE_HZ: u32 = 10;
    pub const MAX_TICK_RATE_HZ: u32 = 120;

    /// Paddle sizes, in glyphs
    pub const MIN_PADDLE_GLYPHS: i32 = 10;
    pub const MAX_PADDLE_GLYPHS: i32 = 30;
    /// Width change applied by Health and Bomb drops, in cells
    pub const PADDLE_STEP: i32 = 5;

    /// Brick grid layout
    pub const BRICK_COLS: i32 = 5;
    pub const BRICK_ROWS: i32 = 8;
    pub const BRICK_H_GAP: i32 = 1;
    pub const BRICK_V_GAP: i32 = 2;
    /// Brick health at its strongest tier
    pub const BRICK_MAX_HEALTH: u8 = 3;

    /// Empty rows kept between the last brick row and the paddle row
    pub const PADDLE_CLEARANCE_ROWS: i32 = 4;
}
