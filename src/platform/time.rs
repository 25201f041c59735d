//! Frame pacing

use std::time::{Duration, Instant};

/// Sleeps out the remainder of each frame when a target rate is set
///
/// Without a target the loop runs unthrottled and `wait` returns at once.
#[derive(Debug)]
pub struct FrameLimiter {
    frame_time: Option<Duration>,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(target_fps: Option<u32>) -> Self {
        Self {
            frame_time: target_fps
                .filter(|&fps| fps > 0)
                .map(|fps| Duration::from_nanos(1_000_000_000 / fps as u64)),
            last: Instant::now(),
        }
    }

    /// Target duration of one frame, if capped
    pub fn frame_time(&self) -> Option<Duration> {
        self.frame_time
    }

    /// Block until the current frame's budget is used up
    pub fn wait(&mut self) {
        if let Some(frame_time) = self.frame_time {
            let elapsed = self.last.elapsed();
            if elapsed < frame_time {
                std::thread::sleep(frame_time - elapsed);
            }
        }
        self.last = Instant::now();
    }
}
