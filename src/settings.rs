//! Game settings
//!
//! Read once at startup from the `BRICKOUT_SETTINGS` environment variable,
//! which holds a JSON object. Missing fields take their defaults; nothing is
//! ever written back.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::DropKind;

/// Environment variable holding the settings JSON
pub const SETTINGS_ENV: &str = "BRICKOUT_SETTINGS";

/// Glyphs used to draw the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum GlyphSet {
    /// Double-width emoji
    #[default]
    Emoji,
    /// Single-width ASCII, for terminals without emoji fonts
    Ascii,
}

impl TryFrom<String> for GlyphSet {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s).ok_or_else(|| format!("unknown glyph set `{s}`"))
    }
}

impl GlyphSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlyphSet::Emoji => "emoji",
            GlyphSet::Ascii => "ascii",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "emoji" => Some(GlyphSet::Emoji),
            "ascii" | "plain" => Some(GlyphSet::Ascii),
            _ => None,
        }
    }

    /// Display width of every game glyph in this set, in cells
    pub fn width(&self) -> i32 {
        match self {
            GlyphSet::Emoji => 2,
            GlyphSet::Ascii => 1,
        }
    }

    pub fn paddle(&self) -> &'static str {
        match self {
            GlyphSet::Emoji => "🟪",
            GlyphSet::Ascii => "=",
        }
    }

    pub fn ball(&self) -> &'static str {
        match self {
            GlyphSet::Emoji => "⚽",
            GlyphSet::Ascii => "o",
        }
    }

    /// Brick glyph for a health tier; `None` for destroyed bricks
    pub fn brick(&self, health: u8) -> Option<&'static str> {
        let glyph = match (self, health) {
            (_, 0) => return None,
            (GlyphSet::Emoji, 1) => "🟨",
            (GlyphSet::Emoji, 2) => "🟧",
            (GlyphSet::Emoji, _) => "🟥",
            (GlyphSet::Ascii, 1) => ":",
            (GlyphSet::Ascii, 2) => "%",
            (GlyphSet::Ascii, _) => "#",
        };
        Some(glyph)
    }

    pub fn drop(&self, kind: DropKind) -> &'static str {
        match (self, kind) {
            (GlyphSet::Emoji, DropKind::Health) => "💖",
            (GlyphSet::Emoji, DropKind::ExtraBall) => "🎁",
            (GlyphSet::Emoji, DropKind::Bomb) => "💣",
            (GlyphSet::Ascii, DropKind::Health) => "H",
            (GlyphSet::Ascii, DropKind::ExtraBall) => "E",
            (GlyphSet::Ascii, DropKind::Bomb) => "*",
        }
    }

    /// Border glyphs: (horizontal, vertical, corner). Always single width.
    pub fn border(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            GlyphSet::Emoji => ("─", "│", "┼"),
            GlyphSet::Ascii => ("-", "|", "+"),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ticks per second
    pub tick_rate_hz: u32,
    /// Glyph set used by the renderer
    pub glyphs: GlyphSet,
    /// Fixed RNG seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            glyphs: GlyphSet::default(),
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from the environment, falling back to defaults
    pub fn load() -> Self {
        match std::env::var(SETTINGS_ENV) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", SETTINGS_ENV);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring invalid {}: {}", SETTINGS_ENV, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Tick rate clamped to the supported range
    pub fn effective_tick_rate(&self) -> u32 {
        self.tick_rate_hz.clamp(MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ)
    }

    /// Time budget of one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.effective_tick_rate()
    }

    /// Configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
