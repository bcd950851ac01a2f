use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Point, Rgb},
    HeartVizError, Result,
};

/// Full configuration surface of the animation engine. Defaults mirror the
/// reference animation; every value can be overridden from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rendering surface extent in pixels; the curve is centered on it.
    pub surface_width: u32,
    pub surface_height: u32,
    /// Frames per animation cycle.
    pub frame_count: usize,
    /// Wall-clock milliseconds between logical beat ticks.
    pub beat_interval_ms: u64,
    /// Curve samples drawn before deduplication.
    pub contour_samples: usize,
    /// Scatter samples per contour point for the edge diffusion layer.
    pub edge_scatter_per_point: usize,
    /// Samples drawn with replacement for the center diffusion layer.
    pub center_scatter_count: usize,
    /// Scale applied to the parametric curve for the fixed point sets.
    pub curve_scale: f64,
    /// Slightly larger scale used when sampling the ambient halo.
    pub halo_scale: f64,
    pub particle_color: Rgb,
    pub background_color: Rgb,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            surface_width: 800,
            surface_height: 600,
            frame_count: 60,
            beat_interval_ms: 100,
            contour_samples: 2000,
            edge_scatter_per_point: 3,
            center_scatter_count: 4000,
            curve_scale: 11.0,
            halo_scale: 11.6,
            particle_color: Rgb::new(0xf7, 0x60, 0x70),
            background_color: Rgb::BLACK,
        }
    }
}

impl EngineConfig {
    /// Center of the rendering surface; every force transform pulls toward
    /// or pushes away from this point.
    pub fn center(&self) -> Point {
        Point::new(
            self.surface_width as f64 / 2.0,
            self.surface_height as f64 / 2.0,
        )
    }

    /// Parses a configuration from a JSON document and validates it.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the engine cannot run with. A zero-area
    /// surface is deliberately allowed: it collapses everything onto the
    /// origin, which is a degenerate visual rather than an error.
    pub fn validate(&self) -> Result<()> {
        if self.frame_count == 0 {
            return Err(HeartVizError::msg("frame_count must be at least 1"));
        }
        if self.contour_samples == 0 {
            return Err(HeartVizError::msg("contour_samples must be at least 1"));
        }
        Ok(())
    }
}
