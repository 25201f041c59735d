//! Input sources

use std::collections::VecDeque;

use crate::sim::FrameInput;

/// Supplies one frame of input per call
///
/// Implementations snapshot the held keys and drain whatever events queued
/// since the last call. Polling must never block.
pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

/// Replays a fixed list of frames, then requests quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Append `count` copies of a frame
    pub fn repeat(mut self, frame: FrameInput, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(frame, count));
        self
    }

    /// Append a single frame
    pub fn then(mut self, frame: FrameInput) -> Self {
        self.frames.push_back(frame);
        self
    }

    /// Frames left before the script runs out
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> FrameInput {
        self.frames.pop_front().unwrap_or_else(FrameInput::quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{InputEvent, KeyState};

    #[test]
    fn test_script_plays_in_order_then_quits() {
        let held = KeyState {
            left: true,
            ..Default::default()
        };
        let mut input = ScriptedInput::default()
            .repeat(FrameInput::holding(held), 2)
            .then(FrameInput::fire(held));
        assert_eq!(input.remaining(), 3);

        assert_eq!(input.poll().held, held);
        assert_eq!(input.poll().held, held);
        assert!(!input.poll().events.is_empty());
        assert_eq!(input.poll().events, vec![InputEvent::Quit]);
        assert_eq!(input.poll().events, vec![InputEvent::Quit]);
    }
}
