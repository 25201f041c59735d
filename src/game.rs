//! Frame loop
//!
//! poll input → tick → compose → present → pace, until quit.

use crate::platform::{FrameLimiter, InputSource, Presenter};
use crate::renderer::compose;
use crate::settings::Settings;
use crate::sim::{GameState, TickOutcome, tick};

/// Exit code reported on a normal quit
pub const EXIT_OK: i32 = 0;

/// Game instance holding all state
pub struct Game<I, P> {
    pub state: GameState,
    input: I,
    presenter: P,
    limiter: FrameLimiter,
}

impl<I: InputSource, P: Presenter> Game<I, P> {
    pub fn new(settings: &Settings, input: I, presenter: P) -> Self {
        Self {
            state: GameState::new(settings),
            input,
            presenter,
            limiter: FrameLimiter::new(settings.target_fps),
        }
    }

    /// Run one frame. Returns `TickOutcome::Quit` without presenting when quit was requested.
    pub fn step(&mut self) -> TickOutcome {
        let input = self.input.poll();
        if tick(&mut self.state, &input) == TickOutcome::Quit {
            return TickOutcome::Quit;
        }
        let frame = compose(&self.state);
        self.presenter.present(&frame);
        self.limiter.wait();
        TickOutcome::Continue
    }

    /// Run until quit; returns the process exit code
    pub fn run(&mut self) -> i32 {
        log::info!("Frame loop running");
        while self.step() == TickOutcome::Continue {}
        log::info!(
            "Quit after {} frames ({} projectiles live)",
            self.state.frame,
            self.state.projectiles.len()
        );
        EXIT_OK
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{LogPresenter, ScriptedInput};
    use crate::renderer::{Frame, SpriteAsset};
    use crate::sim::{FrameInput, KeyState};

    /// Keeps every frame for inspection
    #[derive(Default)]
    struct Recorder {
        frames: Vec<Frame>,
    }

    impl Presenter for Recorder {
        fn present(&mut self, frame: &Frame) {
            self.frames.push(frame.clone());
        }
    }

    #[test]
    fn test_run_until_script_ends() {
        let input = ScriptedInput::default().repeat(FrameInput::default(), 5);
        let mut game = Game::new(&Settings::default(), input, LogPresenter::default());
        assert_eq!(game.run(), EXIT_OK);
        assert_eq!(game.state.frame, 5);
        assert_eq!(game.presenter().frames, 5);
    }

    #[test]
    fn test_projectile_drawn_until_culled() {
        let input = ScriptedInput::default()
            .then(FrameInput::fire(KeyState::default()))
            .repeat(FrameInput::default(), 200);
        let mut game = Game::new(&Settings::default(), input, Recorder::default());
        game.run();

        let frames = &game.presenter().frames;
        assert_eq!(frames.len(), 201);
        assert_eq!(frames[0].sprite_count(SpriteAsset::Projectile), 1);
        // 955 → culled once its right edge passes 1600: live for 64 frames
        let live = frames
            .iter()
            .filter(|f| f.sprite_count(SpriteAsset::Projectile) == 1)
            .count();
        assert_eq!(live, 64);
        assert_eq!(frames[200].sprite_count(SpriteAsset::Projectile), 0);
    }

    #[test]
    fn test_quit_skips_present() {
        let input = ScriptedInput::new([FrameInput::quit(), FrameInput::default()]);
        let mut game = Game::new(&Settings::default(), input, Recorder::default());
        assert_eq!(game.run(), EXIT_OK);
        assert!(game.presenter().frames.is_empty());
    }
}
