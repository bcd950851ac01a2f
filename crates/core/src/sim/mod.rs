use std::collections::HashSet;

use rand::Rng;

use crate::{
    config::EngineConfig,
    curve, field,
    geometry::{AnimationCycle, Frame, Point, SizedPoint},
};

/// Scatter spread for the edge diffusion layer.
const EDGE_SCATTER_BETA: f64 = 0.15;
/// Wider spread for the center diffusion layer.
const CENTER_SCATTER_BETA: f64 = 0.17;
/// Integer jitter applied to surviving halo points, per axis.
const HALO_JITTER: i64 = 14;

/// Owns the three fixed point sets sampled from the heart curve and turns
/// them into the precomputed animation cycle.
///
/// Every random draw goes through the injected [`Rng`], so a seeded
/// generator reproduces the exact same point sets and frames. All
/// randomness is consumed during construction; replaying a frame later is
/// a pure lookup.
#[derive(Debug, Clone)]
pub struct HeartSimulator {
    center: Point,
    contour: Vec<Point>,
    edge_diffusion: Vec<Point>,
    center_diffusion: Vec<Point>,
}

impl HeartSimulator {
    /// Samples the contour and both diffusion layers once.
    pub fn new<R: Rng>(config: &EngineConfig, rng: &mut R) -> Self {
        let center = config.center();
        let contour = build_contour(config, center, rng);
        let edge_diffusion = build_edge_diffusion(config, center, &contour, rng);
        let center_diffusion = build_center_diffusion(config, center, &contour, rng);
        Self {
            center,
            contour,
            edge_diffusion,
            center_diffusion,
        }
    }

    /// Contour samples after exact-identity dedup. At most the configured
    /// sample count; usually slightly fewer.
    pub fn contour(&self) -> &[Point] {
        &self.contour
    }

    pub fn edge_diffusion(&self) -> &[Point] {
        &self.edge_diffusion
    }

    pub fn center_diffusion(&self) -> &[Point] {
        &self.center_diffusion
    }

    /// Total size of the three fixed sets; a lower bound for every frame's
    /// point count (the halo only ever adds to it).
    pub fn fixed_point_count(&self) -> usize {
        self.contour.len() + self.edge_diffusion.len() + self.center_diffusion.len()
    }

    /// Precomputes the full cycle of `config.frame_count` frames.
    pub fn build_cycle<R: Rng>(&self, config: &EngineConfig, rng: &mut R) -> AnimationCycle {
        let frames = (0..config.frame_count)
            .map(|index| self.build_frame(config, index, rng))
            .collect();
        AnimationCycle::new(frames)
    }

    fn build_frame<R: Rng>(&self, config: &EngineConfig, frame_index: usize, rng: &mut R) -> Frame {
        let curve_value = field::pulsation_curve(field::frame_phase(frame_index));
        let ratio = 10.0 * curve_value;
        let halo_radius = 4.0 + 6.0 * (1.0 + curve_value);
        let halo_count = (3000.0 + 4000.0 * curve_value * curve_value) as usize;

        let mut points = Vec::with_capacity(halo_count + self.fixed_point_count());

        // Ambient halo, regenerated from scratch every frame. Samples that
        // collide after rounding are dropped, never re-sampled, so the halo
        // may undercount its target.
        let mut seen = HashSet::with_capacity(halo_count);
        for _ in 0..halo_count {
            let t = curve::random_parameter(rng);
            let sample = curve::heart_function(t, config.halo_scale, self.center);
            let placed = field::shrink_inward(sample, self.center, halo_radius);
            if !seen.insert(placed.rounded_key()) {
                continue;
            }
            let x = placed.x + rng.gen_range(-HALO_JITTER..=HALO_JITTER) as f64;
            let y = placed.y + rng.gen_range(-HALO_JITTER..=HALO_JITTER) as f64;
            let size = if rng.gen::<f64>() < 1.0 / 3.0 { 1 } else { 2 };
            points.push(SizedPoint::new(x, y, size));
        }

        for &point in &self.contour {
            let moved = field::pulsate(point, self.center, ratio, rng);
            points.push(SizedPoint::new(moved.x, moved.y, rng.gen_range(1..=3)));
        }

        for &point in &self.edge_diffusion {
            let moved = field::pulsate(point, self.center, ratio, rng);
            let size = if rng.gen::<bool>() { 1 } else { 2 };
            points.push(SizedPoint::new(moved.x, moved.y, size));
        }

        for &point in &self.center_diffusion {
            let moved = field::pulsate(point, self.center, ratio, rng);
            let size = if rng.gen::<bool>() { 1 } else { 2 };
            points.push(SizedPoint::new(moved.x, moved.y, size));
        }

        Frame::new(points)
    }
}

fn build_contour<R: Rng>(config: &EngineConfig, center: Point, rng: &mut R) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(config.contour_samples);
    let mut points = Vec::with_capacity(config.contour_samples);
    for _ in 0..config.contour_samples {
        let point = curve::heart_function(curve::random_parameter(rng), config.curve_scale, center);
        if seen.insert(point.bit_key()) {
            points.push(point);
        }
    }
    points
}

fn build_edge_diffusion<R: Rng>(
    config: &EngineConfig,
    center: Point,
    contour: &[Point],
    rng: &mut R,
) -> Vec<Point> {
    let mut seen = HashSet::new();
    let mut points = Vec::with_capacity(contour.len() * config.edge_scatter_per_point);
    for &point in contour {
        for _ in 0..config.edge_scatter_per_point {
            let scattered = curve::scatter_inside(point, center, EDGE_SCATTER_BETA, rng);
            if seen.insert(scattered.bit_key()) {
                points.push(scattered);
            }
        }
    }
    points
}

fn build_center_diffusion<R: Rng>(
    config: &EngineConfig,
    center: Point,
    contour: &[Point],
    rng: &mut R,
) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(config.center_scatter_count);
    let mut points = Vec::with_capacity(config.center_scatter_count);
    for _ in 0..config.center_scatter_count {
        let base = contour[rng.gen_range(0..contour.len())];
        let scattered = curve::scatter_inside(base, center, CENTER_SCATTER_BETA, rng);
        if seen.insert(scattered.bit_key()) {
            points.push(scattered);
        }
    }
    points
}
