//! Axis-aligned rectangles in terminal cells
//!
//! Every entity in the play field (paddle, balls, bricks, drops) occupies a
//! `Rect`. Collisions are plain overlap tests between two of them.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle measured in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    /// Width in cells (never negative)
    pub w: i32,
    /// Height in cells (never negative)
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rightmost occupied column
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w - 1
    }

    /// Bottom occupied row
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h - 1
    }

    /// Horizontal centre column (integer division)
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    /// Overlap test with inclusive edges.
    ///
    /// Rectangles that merely touch count as overlapping: `self` misses `other`
    /// only when it lies strictly left, right, above or below it.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x + self.w < other.x
            || self.x > other.x + other.w
            || self.y + self.h < other.y
            || self.y > other.y + other.h)
    }
}
