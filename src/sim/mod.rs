//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick, integer cells only
//! - Seeded RNG only
//! - Stable iteration order (balls in spawn order, bricks row-major)
//! - No rendering or terminal dependencies

pub mod collision;
pub mod field;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{bounce_direction, zone_direction};
pub use field::PlayField;
pub use rect::Rect;
pub use state::{Ball, Brick, DropItem, DropKind, DropState, GamePhase, GameState, Paddle};
pub use tick::{TickInput, TickReport, apply_drop, generate_bricks, tick};
