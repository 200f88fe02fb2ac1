//! Frame timing for the per-frame update.

use instant::Instant;

/// Time inputs for one animation pass, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Time since the previous frame.
    pub delta: f32,
    /// Time since the clock started; drives idle motion phases.
    pub elapsed: f32,
}

impl FrameTime {
    pub fn fixed(delta: f32, elapsed: f32) -> Self {
        Self { delta, elapsed }
    }
}

/// Measured tick source. Uses `instant` so the same code runs on wasm32.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Advance to now and report the frame's timing.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        FrameTime {
            delta,
            elapsed: now.duration_since(self.start).as_secs_f32(),
        }
    }
}
