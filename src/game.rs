//! Start menu and fixed-tick game loop
//!
//! Each tick polls one key, runs the simulation step, draws the frame and
//! sleeps for whatever is left of the tick budget.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::renderer::{Key, Surface, draw_frame, draw_menu};
use crate::settings::{GlyphSet, Settings};
use crate::sim::{GameState, PlayField, TickInput, generate_bricks, tick};

/// Poll interval while the start menu waits for a choice
const MENU_POLL: Duration = Duration::from_millis(20);

/// Player intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(i32),
    Launch,
    Pause,
    Quit,
    Idle,
}

impl Command {
    pub fn from_key(key: Option<Key>) -> Self {
        match key {
            Some(Key::Left | Key::Char('a' | 'A')) => Command::Move(-1),
            Some(Key::Right | Key::Char('d' | 'D')) => Command::Move(1),
            Some(Key::Up | Key::Char(' ' | 'w' | 'W')) => Command::Launch,
            Some(Key::Char('p' | 'P')) => Command::Pause,
            Some(Key::Char('q' | 'Q') | Key::Esc | Key::Interrupt) => Command::Quit,
            _ => Command::Idle,
        }
    }

    pub fn tick_input(self) -> TickInput {
        match self {
            Command::Move(dir) => TickInput {
                paddle_dir: dir,
                ..Default::default()
            },
            Command::Launch => TickInput {
                launch: true,
                ..Default::default()
            },
            Command::Pause => TickInput {
                pause: true,
                ..Default::default()
            },
            Command::Quit | Command::Idle => TickInput::default(),
        }
    }
}

/// Start menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Quit,
}

impl MenuChoice {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('1') => Some(MenuChoice::Start),
            Key::Char('2' | 'q' | 'Q') | Key::Esc | Key::Interrupt => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// A running game: state plus the bits of settings the loop needs
pub struct Game {
    pub state: GameState,
    glyphs: GlyphSet,
    tick_budget: Duration,
}

impl Game {
    /// Fresh level for `field`
    pub fn new(field: PlayField, settings: &Settings) -> Self {
        let glyphs = settings.glyphs;
        let seed = settings.resolve_seed();
        log::info!("New game: seed {}, glyphs {}", seed, glyphs.as_str());

        let mut state = GameState::new(field, glyphs.width(), seed);
        generate_bricks(&mut state);
        Self {
            state,
            glyphs,
            tick_budget: settings.tick_duration(),
        }
    }

    /// Input, update, render for one tick. Returns false once the player quits.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<bool> {
        let command = Command::from_key(surface.poll_key()?);
        if command == Command::Quit {
            return Ok(false);
        }

        let report = tick(&mut self.state, &command.tick_input())?;
        if report.balls_lost > 0 && self.state.balls.is_empty() {
            log::info!("All balls lost");
        }
        if report.bricks_destroyed > 0 && self.state.bricks_remaining() == 0 {
            log::info!("All bricks cleared in {} ticks", self.state.time_ticks);
        }

        draw_frame(surface, &self.state, self.glyphs)?;
        Ok(true)
    }

    /// Run ticks until the player quits
    pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        loop {
            let started = Instant::now();
            if !self.step(surface)? {
                break;
            }
            if let Some(rest) = self.tick_budget.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }

        log::info!(
            "Quit after {} ticks: {} bricks left, {} ball(s) in play",
            self.state.time_ticks,
            self.state.bricks_remaining(),
            self.state.balls.len()
        );
        Ok(())
    }
}

/// Show the start menu until the player picks an option
pub fn run_menu<S: Surface + ?Sized>(
    surface: &mut S,
    field: &PlayField,
    glyphs: GlyphSet,
) -> Result<MenuChoice> {
    draw_menu(surface, field, glyphs)?;
    loop {
        if let Some(choice) = surface.poll_key()?.and_then(MenuChoice::from_key) {
            return Ok(choice);
        }
        thread::sleep(MENU_POLL);
    }
}

/// Size the play field, show the menu, then play until quit
pub fn run<S: Surface + ?Sized>(surface: &mut S, settings: &Settings) -> Result<()> {
    let (rows, cols) = surface.terminal_size()?;
    let field = PlayField::fit(cols, rows, settings.glyphs.width())?;
    log::info!("Play field {}x{} in a {}x{} terminal", field.outer.w, field.outer.h, cols, rows);

    match run_menu(surface, &field, settings.glyphs)? {
        MenuChoice::Start => Game::new(field, settings).run(surface),
        MenuChoice::Quit => {
            log::info!("Quit from menu");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::renderer::testing::ScriptedSurface;

    fn fast_settings() -> Settings {
        Settings {
            tick_rate_hz: 120,
            seed: Some(5),
            ..Default::default()
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Command::from_key(Some(Key::Left)), Command::Move(-1));
        assert_eq!(Command::from_key(Some(Key::Char('d'))), Command::Move(1));
        assert_eq!(Command::from_key(Some(Key::Up)), Command::Launch);
        assert_eq!(Command::from_key(Some(Key::Char(' '))), Command::Launch);
        assert_eq!(Command::from_key(Some(Key::Char('p'))), Command::Pause);
        assert_eq!(Command::from_key(Some(Key::Char('q'))), Command::Quit);
        assert_eq!(Command::from_key(Some(Key::Interrupt)), Command::Quit);
        assert_eq!(Command::from_key(Some(Key::Down)), Command::Idle);
        assert_eq!(Command::from_key(None), Command::Idle);

        assert_eq!(Command::Move(-1).tick_input().paddle_dir, -1);
        assert!(Command::Launch.tick_input().launch);
        assert!(Command::Pause.tick_input().pause);
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(MenuChoice::from_key(Key::Char('1')), Some(MenuChoice::Start));
        assert_eq!(MenuChoice::from_key(Key::Char('2')), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::from_key(Key::Char('q')), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::from_key(Key::Left), None);
    }

    #[test]
    fn test_quit_from_menu() {
        let mut surface = ScriptedSurface::new(40, 80, [None, Some(Key::Char('x')), Some(Key::Char('2'))]);
        run(&mut surface, &fast_settings()).unwrap();
        // Only the menu was presented
        assert_eq!(surface.frames_presented, 1);
        assert!(surface.runs_of("🟪").is_empty());
    }

    #[test]
    fn test_play_then_quit() {
        let keys = [
            Some(Key::Char('1')),
            Some(Key::Right),
            Some(Key::Up),
            None,
            Some(Key::Char('q')),
        ];
        let mut surface = ScriptedSurface::new(40, 80, keys);
        run(&mut surface, &fast_settings()).unwrap();
        // Menu plus three game frames
        assert_eq!(surface.frames_presented, 4);
        assert_eq!(surface.runs_of("🟪").len(), 1);
        assert!(surface.keys.is_empty());
    }

    #[test]
    fn test_step_launches_ball() {
        let settings = fast_settings();
        let mut game = Game::new(PlayField::new(80, 40), &settings);
        assert_eq!(game.state.bricks.len(), 40);

        let mut surface = ScriptedSurface::new(40, 80, [Some(Key::Up), Some(Key::Esc)]);
        assert!(game.step(&mut surface).unwrap());
        assert!(game.state.balls[0].launched);
        assert!(!game.step(&mut surface).unwrap());
    }

    #[test]
    fn test_terminal_too_small() {
        let mut surface = ScriptedSurface::new(20, 40, []);
        let err = run(&mut surface, &fast_settings()).unwrap_err();
        assert!(matches!(err, GameError::TerminalTooSmall { .. }));
        assert_eq!(surface.frames_presented, 0);
    }
}
