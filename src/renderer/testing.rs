//! In-memory surface for tests

use std::collections::VecDeque;

use super::{Key, Surface};
use crate::error::Result;

/// One recorded `draw_glyph_run` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GlyphRun {
    pub row: i32,
    pub col: i32,
    pub glyph: String,
    pub count: usize,
}

/// Plays back scripted keys and records what was drawn.
///
/// Once the script runs out every poll returns `Key::Interrupt`, so a loop
/// under test always terminates.
pub(crate) struct ScriptedSurface {
    pub rows: u16,
    pub cols: u16,
    pub keys: VecDeque<Option<Key>>,
    /// Runs drawn since the last `clear`
    pub runs: Vec<GlyphRun>,
    pub frames_presented: usize,
}

impl ScriptedSurface {
    pub fn new(rows: u16, cols: u16, keys: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            rows,
            cols,
            keys: keys.into_iter().collect(),
            runs: Vec::new(),
            frames_presented: 0,
        }
    }

    /// Runs drawn with `glyph`
    pub fn runs_of(&self, glyph: &str) -> Vec<&GlyphRun> {
        self.runs.iter().filter(|r| r.glyph == glyph).collect()
    }
}

impl Surface for ScriptedSurface {
    fn clear(&mut self) -> Result<()> {
        self.runs.clear();
        Ok(())
    }

    fn draw_glyph_run(&mut self, row: i32, col: i32, glyph: &str, count: usize) -> Result<()> {
        if row < 0 || col < 0 || count == 0 {
            return Ok(());
        }
        self.runs.push(GlyphRun {
            row,
            col,
            glyph: glyph.to_string(),
            count,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.frames_presented += 1;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<Key>> {
        Ok(self.keys.pop_front().unwrap_or(Some(Key::Interrupt)))
    }

    fn terminal_size(&self) -> Result<(u16, u16)> {
        Ok((self.rows, self.cols))
    }
}
