use std::time::{Duration, Instant};

use rand::Rng;

use crate::{
    config::EngineConfig,
    geometry::{AnimationCycle, Frame},
    render::{self, Surface},
    sim::HeartSimulator,
    timeline::PlaybackClock,
    Result,
};

/// Facade tying the precomputed animation to playback state. All mutable
/// state lives here; the cycle itself is frozen at construction and can be
/// shared read-only with any number of renderers.
#[derive(Debug)]
pub struct HeartEngine {
    config: EngineConfig,
    cycle: AnimationCycle,
    clock: PlaybackClock,
}

impl HeartEngine {
    /// Validates the configuration, samples the point sets and precomputes
    /// every frame. This is the expensive step of the whole system and runs
    /// exactly once, before the first paint.
    pub fn new<R: Rng>(config: EngineConfig, rng: &mut R) -> Result<Self> {
        Self::started_at(config, rng, Instant::now())
    }

    /// Like [`HeartEngine::new`] with an explicit clock start instant.
    pub fn started_at<R: Rng>(config: EngineConfig, rng: &mut R, now: Instant) -> Result<Self> {
        config.validate()?;
        let simulator = HeartSimulator::new(&config, rng);
        let cycle = simulator.build_cycle(&config, rng);
        let clock = PlaybackClock::started_at(
            config.frame_count,
            Duration::from_millis(config.beat_interval_ms),
            now,
        );
        Ok(Self {
            config,
            cycle,
            clock,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cycle(&self) -> &AnimationCycle {
        &self.cycle
    }

    pub fn current_frame(&self) -> usize {
        self.clock.current_frame()
    }

    pub fn frame(&self, index: usize) -> &Frame {
        self.cycle.frame(index)
    }

    /// One paint callback: advance the beat clock if an interval elapsed,
    /// then draw the current frame. Returns the index that was drawn.
    pub fn render_tick(&mut self, surface: &mut dyn Surface, now: Instant) -> usize {
        let index = self.clock.tick_at(now);
        render::draw_frame(
            surface,
            self.cycle.frame(index),
            self.config.particle_color,
            self.config.background_color,
        );
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PixelSurface;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn full_cycle_and_beat_advancement() {
        let config = EngineConfig {
            surface_width: 800,
            surface_height: 600,
            contour_samples: 2000,
            frame_count: 60,
            ..EngineConfig::default()
        };
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut engine = HeartEngine::started_at(config.clone(), &mut rng, start).unwrap();
        assert_eq!(engine.cycle().len(), 60);

        let mut surface = PixelSurface::new(config.surface_width, config.surface_height);

        // Two callbacks inside one beat interval draw the same frame.
        let first = engine.render_tick(&mut surface, start);
        let second = engine.render_tick(&mut surface, start + Duration::from_millis(50));
        assert_eq!(first, 0);
        assert_eq!(second, 0);

        // After a full interval the index advances by exactly one.
        let third = engine.render_tick(&mut surface, start + Duration::from_millis(150));
        assert_eq!(third, 1);
        assert_eq!(engine.current_frame(), 1);
    }

    #[test]
    fn rejects_invalid_configuration() {
        let config = EngineConfig {
            frame_count: 0,
            ..EngineConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(HeartEngine::new(config, &mut rng).is_err());
    }

    #[test]
    fn degenerate_surface_still_renders() {
        let config = EngineConfig {
            surface_width: 0,
            surface_height: 0,
            contour_samples: 50,
            center_scatter_count: 50,
            frame_count: 5,
            ..EngineConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = HeartEngine::new(config, &mut rng).unwrap();
        let mut surface = PixelSurface::new(0, 0);
        // Everything collapses near the origin; drawing must not panic.
        engine.render_tick(&mut surface, Instant::now());
    }
}
