//! Brickout entry point
//!
//! Sets up logging and settings, takes over the terminal and runs the game.

use std::process::ExitCode;

use brickout::Settings;
use brickout::game;
use brickout::renderer::TerminalSurface;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Brickout starting...");

    let settings = Settings::load();
    log::info!(
        "Settings: {} Hz, {} glyphs",
        settings.effective_tick_rate(),
        settings.glyphs.as_str()
    );

    // The surface is dropped, and the terminal restored, before any error is printed
    let result = TerminalSurface::new().and_then(|mut surface| game::run(&mut surface, &settings));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
