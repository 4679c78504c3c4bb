//! Crossterm terminal backend
//!
//! Owns the terminal for the lifetime of the game: alternate screen, raw
//! mode, hidden cursor. Everything is restored on drop, including when the
//! game bails out with an error.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor},
    terminal::{
        self, BeginSynchronizedUpdate, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};

use super::{Key, Surface};
use crate::error::Result;

pub struct TerminalSurface {
    out: Stdout,
}

impl TerminalSurface {
    /// Take over the terminal
    pub fn new() -> Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            terminal::Clear(ClearType::All)
        )?;
        log::debug!("Terminal initialised");
        Ok(Self { out })
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            EndSynchronizedUpdate,
            EnableLineWrap,
            cursor::Show,
            LeaveAlternateScreen,
            ResetColor
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("Terminal restored");
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self) -> Result<()> {
        queue!(
            self.out,
            BeginSynchronizedUpdate,
            terminal::Clear(ClearType::All)
        )?;
        Ok(())
    }

    fn draw_glyph_run(&mut self, row: i32, col: i32, glyph: &str, count: usize) -> Result<()> {
        let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
            return Ok(());
        };
        if count == 0 {
            return Ok(());
        }
        // The terminal advances the cursor by the glyph's display width
        queue!(self.out, cursor::MoveTo(col, row), Print(glyph.repeat(count)))?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()?;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<Key>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        let key = match event::read()? {
            Event::Key(k) if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat => {
                match k.code {
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(Key::Interrupt)
                    }
                    KeyCode::Char(ch) => Some(Key::Char(ch)),
                    KeyCode::Left => Some(Key::Left),
                    KeyCode::Right => Some(Key::Right),
                    KeyCode::Up => Some(Key::Up),
                    KeyCode::Down => Some(Key::Down),
                    KeyCode::Esc => Some(Key::Esc),
                    _ => None,
                }
            }
            _ => None,
        };
        Ok(key)
    }

    fn terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }
}
