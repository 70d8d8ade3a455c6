use std::time::Instant;

/// How often the FPS readout refreshes, seconds
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock was last restarted
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Monotonic frame clock; restarted whenever a scene mounts so every scene
/// animates from `t = 0`
#[derive(Debug)]
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn time(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
    }

    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame deltas over [`FPS_UPDATE_INTERVAL`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    /// Returns the new average when one is produced
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.elapsed;
            self.frame_count = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_counts_frames_and_time() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        thread::sleep(Duration::from_millis(10));
        let second = clock.tick();

        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert!(second.time >= first.time);
        assert!(second.delta >= 0.009);
    }

    #[test]
    fn restart_resets_time() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        clock.tick();
        clock.restart();
        assert_eq!(clock.frame_number(), 0);
        assert!(clock.time() < 0.005);
    }

    #[test]
    fn fps_counter_averages_interval() {
        let mut counter = FpsCounter::default();
        for _ in 0..59 {
            assert!(counter.record(1.0 / 60.0).is_none());
        }
        let fps = counter.record(1.0 / 60.0 + 0.001).expect("interval elapsed");
        assert!((fps - 60.0).abs() < 1.0);
    }
}
