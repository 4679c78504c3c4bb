//! Drawing game state and the start menu onto a `Surface`

use super::Surface;
use crate::error::Result;
use crate::settings::GlyphSet;
use crate::sim::{GamePhase, GameState, PlayField, Rect};

/// Block-letter title for the start menu
const TITLE_ART: &[&str] = &[
    "▀█████████▄     ▄████████  ▄█   ▄████████    ▄█   ▄█▄  ▄██████▄  ███    █▄      ███",
    "  ███    ███   ███    ███ ███  ███    ███   ███ ▄███▀ ███    ███ ███    ███ ▀█████████▄",
    "  ███    ███   ███    ███ ███▌ ███    █▀    ███▐██▀   ███    ███ ███    ███    ▀███▀▀██",
    " ▄███▄▄▄██▀   ▄███▄▄▄▄██▀ ███▌ ███         ▄█████▀    ███    ███ ███    ███     ███   ▀",
    "▀▀███▀▀▀██▄  ▀▀███▀▀▀▀▀   ███▌ ███        ▀▀█████▄    ███    ███ ███    ███     ███",
    "  ███    ██▄ ▀███████████ ███  ███    █▄    ███▐██▄   ███    ███ ███    ███     ███",
    "  ███    ███   ███    ███ ███  ███    ███   ███ ▀███▄ ███    ███ ███    ███     ███",
    "▄█████████▀    ███    ███ █▀   ████████▀    ███   ▀█▀  ▀██████▀  ████████▀     ▄████▀",
    "               ███    ███                   ▀",
];

const TITLE_PLAIN: &str = "B R I C K O U T";
const MENU_START: &str = "1. Start Game";
const MENU_QUIT: &str = "2. Quit      ";
const PAUSED: &str = "PAUSED - press p to resume";

/// Whole glyphs that fit in `cells`
fn glyph_count(cells: i32, glyph_width: i32) -> usize {
    (cells / glyph_width.max(1)).max(0) as usize
}

/// Single-width text on one row
fn draw_text<S: Surface + ?Sized>(surface: &mut S, row: i32, col: i32, text: &str) -> Result<()> {
    surface.draw_glyph_run(row, col, text, 1)
}

/// Column that centres `len` cells inside `outer`
fn centered(outer: &Rect, len: i32) -> i32 {
    outer.x + (outer.w - len) / 2
}

fn text_width(lines: &[&str]) -> i32 {
    lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as i32
}

fn draw_border<S: Surface + ?Sized>(
    surface: &mut S,
    field: &PlayField,
    glyphs: GlyphSet,
) -> Result<()> {
    let outer = field.outer;
    if outer.w < 2 || outer.h < 2 {
        return Ok(());
    }
    let (horizontal, vertical, corner) = glyphs.border();
    let span = (outer.w - 2) as usize;

    for row in [outer.y, outer.bottom()] {
        surface.draw_glyph_run(row, outer.x, corner, 1)?;
        surface.draw_glyph_run(row, outer.x + 1, horizontal, span)?;
        surface.draw_glyph_run(row, outer.right(), corner, 1)?;
    }
    for row in outer.y + 1..outer.bottom() {
        surface.draw_glyph_run(row, outer.x, vertical, 1)?;
        surface.draw_glyph_run(row, outer.right(), vertical, 1)?;
    }
    Ok(())
}

/// Draw one full frame: border, bricks, falling drops, paddle, balls
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    state: &GameState,
    glyphs: GlyphSet,
) -> Result<()> {
    let width = glyphs.width();
    surface.clear()?;
    draw_border(surface, &state.field, glyphs)?;

    for brick in &state.bricks {
        // Destroyed bricks are invisible
        if let Some(glyph) = glyphs.brick(brick.health) {
            let count = glyph_count(brick.rect.w, width);
            surface.draw_glyph_run(brick.rect.y, brick.rect.x, glyph, count)?;
        }
    }

    for drop in state.live_drops() {
        let count = glyph_count(drop.rect.w, width);
        surface.draw_glyph_run(drop.rect.y, drop.rect.x, glyphs.drop(drop.kind), count)?;
    }

    let paddle = &state.paddle.rect;
    surface.draw_glyph_run(paddle.y, paddle.x, glyphs.paddle(), glyph_count(paddle.w, width))?;

    for ball in &state.balls {
        surface.draw_glyph_run(ball.rect.y, ball.rect.x, glyphs.ball(), 1)?;
    }

    if state.phase == GamePhase::Paused {
        let outer = state.field.outer;
        let col = centered(&outer, PAUSED.len() as i32);
        draw_text(surface, outer.y + outer.h / 2, col, PAUSED)?;
    }

    surface.present()
}

/// Draw the start menu: title banner and the two options.
///
/// The block-letter banner needs a wide window; narrower ones get plain text.
pub fn draw_menu<S: Surface + ?Sized>(
    surface: &mut S,
    field: &PlayField,
    glyphs: GlyphSet,
) -> Result<()> {
    let outer = field.outer;
    let title: &[&str] = if text_width(TITLE_ART) + 2 <= outer.w {
        TITLE_ART
    } else {
        &[TITLE_PLAIN]
    };

    surface.clear()?;
    draw_border(surface, field, glyphs)?;

    let lines = title.len() as i32;
    let start_row = outer.y + (outer.h - lines - 4) / 2;
    let title_col = centered(&outer, text_width(title));
    for (i, line) in title.iter().enumerate() {
        draw_text(surface, start_row + i as i32, title_col, line)?;
    }

    let menu_row = start_row + lines;
    let start_col = centered(&outer, MENU_START.len() as i32);
    let quit_col = centered(&outer, MENU_QUIT.len() as i32);
    draw_text(surface, menu_row + 1, start_col, MENU_START)?;
    draw_text(surface, menu_row + 2, quit_col, MENU_QUIT)?;

    surface.present()
}
