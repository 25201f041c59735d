//! Tank Survivor entry point
//!
//! Native builds have no window backend wired in; the binary runs a short
//! headless attract demo through the real frame loop and exits.

use tank_survivor::platform::{LogPresenter, ScriptedInput};
use tank_survivor::sim::{FrameInput, KeyState};
use tank_survivor::{Game, Settings};

/// Drive right, sweep up-left while firing, then idle until shots clear
fn attract_script() -> ScriptedInput {
    let right = KeyState {
        right: true,
        ..Default::default()
    };
    let up_left = KeyState {
        up: true,
        left: true,
        modifier: true,
        ..Default::default()
    };

    let mut script = ScriptedInput::default()
        .repeat(FrameInput::holding(right), 120)
        .then(FrameInput::fire(right));
    for _ in 0..4 {
        script = script
            .repeat(FrameInput::holding(up_left), 30)
            .then(FrameInput::fire(up_left));
    }
    script.repeat(FrameInput::default(), 180)
}

fn main() {
    env_logger::init();

    let settings = Settings::load();
    log::info!(
        "{} starting ({}x{}, {} walls)",
        settings.caption,
        settings.arena_width,
        settings.arena_height,
        settings.walls.len()
    );
    log::info!("Native mode has no window backend - running headless demo");

    let mut game = Game::new(&settings, attract_script(), LogPresenter::default());
    let code = game.run();
    std::process::exit(code);
}
