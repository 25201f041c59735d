//! Platform abstraction layer
//!
//! The window, keyboard and surface belong to an external backend. This module
//! defines the seams the game loop talks to:
//! - `InputSource`: held-key snapshot plus a non-blocking event drain
//! - `Presenter`: receives each composed frame
//! - `FrameLimiter`: optional frame pacing

pub mod input;
pub mod time;

pub use input::{InputSource, ScriptedInput};
pub use time::FrameLimiter;

use crate::renderer::Frame;

/// Receives composed frames for display
pub trait Presenter {
    fn present(&mut self, frame: &Frame);
}

/// Presenter that only logs at trace level; used headless
#[derive(Debug, Default)]
pub struct LogPresenter {
    pub frames: u64,
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} draw commands",
            self.frames,
            frame.commands.len()
        );
    }
}
