//! Frame pacing and blocking pauses.

use std::thread;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Block until at least `1/fps` seconds have passed since the previous tick.
    fn tick(&mut self, fps: u32);

    /// Block for `ms` milliseconds.
    fn wait(&mut self, ms: u64);
}

/// Wall-clock implementation backed by `thread::sleep`.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, fps: u32) {
        let frame = Duration::from_secs(1) / fps.max(1);
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < frame {
                thread::sleep(frame - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
    }

    fn wait(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Records ticks and waits instead of sleeping.
///
/// `elapsed_ms` is the time a real clock would have spent, counting every
/// tick as one full frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManualClock {
    pub ticks: u64,
    pub waits: Vec<u64>,
    pub elapsed_ms: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for ManualClock {
    fn tick(&mut self, fps: u32) {
        self.ticks += 1;
        self.elapsed_ms += 1000 / u64::from(fps.max(1));
    }

    fn wait(&mut self, ms: u64) {
        self.waits.push(ms);
        self.elapsed_ms += ms;
    }
}
