//! Render/input adapter
//!
//! The game draws through the `Surface` trait and reads keys from it. The sim
//! never sees it; `TerminalSurface` is the crossterm implementation.

pub mod draw;
pub mod terminal;

#[cfg(test)]
pub(crate) mod testing;

pub use draw::{draw_frame, draw_menu};
pub use terminal::TerminalSurface;

use crate::error::Result;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Esc,
    /// Ctrl-C (raw mode swallows the signal)
    Interrupt,
    Char(char),
}

/// A text grid the game draws on and reads input from
pub trait Surface {
    /// Start a new frame with an empty grid
    fn clear(&mut self) -> Result<()>;

    /// Draw `glyph` `count` times side by side starting at (`row`, `col`).
    ///
    /// Each copy advances by the glyph's display width. Runs starting off
    /// the grid are skipped.
    fn draw_glyph_run(&mut self, row: i32, col: i32, glyph: &str, count: usize) -> Result<()>;

    /// Show the frame
    fn present(&mut self) -> Result<()>;

    /// Next pending key, without blocking
    fn poll_key(&mut self) -> Result<Option<Key>>;

    /// Current size as (rows, cols)
    fn terminal_size(&self) -> Result<(u16, u16)>;
}
