//! Play field geometry
//!
//! The outer rectangle is the whole game window (border included); the inner
//! rectangle is the play area the balls bounce inside.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::error::{GameError, Result};

/// Window and play-area rectangles, derived once from the terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayField {
    /// Full window, including the one-cell border
    pub outer: Rect,
    /// Play area inside the border (collision bounds)
    pub inner: Rect,
}

impl PlayField {
    /// Build the field for a terminal of `cols` x `rows` cells.
    ///
    /// The window width is rounded down to an even column count so double-width
    /// glyphs tile it exactly.
    pub fn new(cols: i32, rows: i32) -> Self {
        let width = if cols % 2 == 0 { cols } else { cols - 1 };
        let outer = Rect::new((cols - width) / 2, 0, width, rows);
        let inner = Rect::new(outer.x + 1, outer.y + 1, (width - 2).max(0), (rows - 2).max(0));
        Self { outer, inner }
    }

    /// Build the field, failing if the terminal cannot hold the level.
    pub fn fit(cols: u16, rows: u16, glyph_width: i32) -> Result<Self> {
        let (required_cols, required_rows) = Self::required_size(glyph_width);
        if cols < required_cols || rows < required_rows {
            return Err(GameError::TerminalTooSmall {
                cols,
                rows,
                required_cols,
                required_rows,
            });
        }
        Ok(Self::new(i32::from(cols), i32::from(rows)))
    }

    /// Smallest terminal (cols, rows) that fits the widest paddle, the brick
    /// grid and the paddle row.
    pub fn required_size(glyph_width: i32) -> (u16, u16) {
        let paddle_cells = MAX_PADDLE_GLYPHS * glyph_width;
        let grid_cells = BRICK_COLS * glyph_width + (BRICK_COLS - 1) * BRICK_H_GAP;
        let mut cols = paddle_cells.max(grid_cells) + 2;
        if cols % 2 != 0 {
            cols += 1;
        }

        // Inner top is row 1, the paddle sits on the last inner row and the
        // border takes one more.
        let last_brick_row = 1 + brick_row_offset(BRICK_ROWS - 1);
        let rows = last_brick_row + PADDLE_CLEARANCE_ROWS + 3;

        (cols as u16, rows as u16)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.inner.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.inner.right()
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.inner.y
    }

    /// Last inner row; the paddle lives here and balls reaching it are lost
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.inner.bottom()
    }
}

/// Row of brick row `row` relative to the inner top
pub(crate) fn brick_row_offset(row: i32) -> i32 {
    row + BRICK_V_GAP * (row + 1)
}
