use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

/// Advances the logical frame index once per fixed beat interval,
/// independent of how often the host's paint callback fires.
///
/// Several paint callbacks typically land between two beats; every call in
/// that window reports the same index, which callers must tolerate.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    current_frame: usize,
    frame_count: usize,
    beat_interval: Duration,
    last_tick: Instant,
}

impl PlaybackClock {
    pub fn new(frame_count: usize, beat_interval: Duration) -> Self {
        Self::started_at(frame_count, beat_interval, Instant::now())
    }

    /// Construction with an explicit start instant, for deterministic tests.
    pub fn started_at(frame_count: usize, beat_interval: Duration, now: Instant) -> Self {
        Self {
            current_frame: 0,
            frame_count: frame_count.max(1),
            beat_interval,
            last_tick: now,
        }
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Called once per paint callback; returns the frame index to draw.
    pub fn tick(&mut self) -> usize {
        self.tick_at(Instant::now())
    }

    /// Advances by one frame (modulo the cycle length) when at least one
    /// beat interval has elapsed since the last advance; otherwise leaves
    /// the state untouched.
    pub fn tick_at(&mut self, now: Instant) -> usize {
        if now.duration_since(self.last_tick) >= self.beat_interval {
            self.current_frame = (self.current_frame + 1) % self.frame_count;
            self.last_tick = now;
        }
        self.current_frame
    }
}

/// Cooperative cancellation flag for a host-driven render loop. Cloning
/// shares the flag, so one copy can live with the loop and another with
/// whoever decides to stop it.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEAT: Duration = Duration::from_millis(100);

    #[test]
    fn holds_frame_below_the_beat_interval() {
        let start = Instant::now();
        let mut clock = PlaybackClock::started_at(60, BEAT, start);
        assert_eq!(clock.tick_at(start + Duration::from_millis(50)), 0);
        assert_eq!(clock.tick_at(start + Duration::from_millis(99)), 0);
    }

    #[test]
    fn advances_exactly_once_per_beat() {
        let start = Instant::now();
        let mut clock = PlaybackClock::started_at(60, BEAT, start);
        assert_eq!(clock.tick_at(start + Duration::from_millis(150)), 1);
        // Still within the new interval, so repeated callbacks see frame 1.
        assert_eq!(clock.tick_at(start + Duration::from_millis(200)), 1);
        assert_eq!(clock.tick_at(start + Duration::from_millis(249)), 1);
        assert_eq!(clock.tick_at(start + Duration::from_millis(250)), 2);
    }

    #[test]
    fn wraps_around_the_cycle() {
        let start = Instant::now();
        let mut clock = PlaybackClock::started_at(3, BEAT, start);
        let mut now = start;
        for expected in [1, 2, 0, 1] {
            now += BEAT;
            assert_eq!(clock.tick_at(now), expected);
        }
    }

    #[test]
    fn stop_handle_is_shared_across_clones() {
        let handle = StopHandle::new();
        let observer = handle.clone();
        assert!(!observer.is_stopped());
        handle.request_stop();
        assert!(observer.is_stopped());
    }
}
