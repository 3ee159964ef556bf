//! Frame timing

use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_DT;

pub struct FrameClock {
    last: Instant,
    frame: Duration,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            last: Instant::now(),
            frame: frame_duration(target_fps),
        }
    }

    /// Seconds since the previous call, capped at `MAX_FRAME_DT`
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(MAX_FRAME_DT)
    }

    /// Sleep off whatever is left of this frame's budget
    pub fn pace(&self) {
        let spent = self.last.elapsed();
        if spent < self.frame {
            std::thread::sleep(self.frame - spent);
        }
    }
}

/// Budget for one frame; 0 fps is treated as 1
pub fn frame_duration(target_fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / target_fps.max(1) as f64)
}
