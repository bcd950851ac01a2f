//! Stateless radial force transforms shared by the halo placement and the
//! per-frame beat animation.

use std::f64::consts::PI;

use rand::Rng;

use crate::geometry::Point;

/// Floor for the squared center distance. A point exactly at the center
/// would otherwise divide by zero in the fractional-power falloffs.
const MIN_SQUARED_DISTANCE: f64 = 1e-6;

fn squared_distance(point: Point, center: Point) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    (dx * dx + dy * dy).max(MIN_SQUARED_DISTANCE)
}

/// Halo placement transform: displaces a curve sample along the center ray
/// by `radius * force`, where the force falls off with the squared distance
/// raised to 0.6.
pub fn shrink_inward(point: Point, center: Point, radius: f64) -> Point {
    let force = -1.0 / squared_distance(point, center).powf(0.6);
    Point::new(
        point.x - radius * force * (point.x - center.x),
        point.y - radius * force * (point.y - center.y),
    )
}

/// Beat transform applied to every fixed point each frame. Positive `ratio`
/// contracts toward the center, negative expands outward; the jitter is an
/// independent uniform offset in `[-1, 2)` per axis.
pub fn pulsate<R: Rng>(point: Point, center: Point, ratio: f64, rng: &mut R) -> Point {
    let force = 1.0 / squared_distance(point, center).powf(0.52);
    let dx = ratio * force * (point.x - center.x) + (rng.gen::<f64>() * 3.0 - 1.0);
    let dy = ratio * force * (point.y - center.y) + (rng.gen::<f64>() * 3.0 - 1.0);
    Point::new(point.x - dx, point.y - dy)
}

/// Periodic drive for the beat: `(4/π) * sin(4 * phase)`, bounded in
/// `[-4/π, 4/π]` with period `π/2`. Its sign oscillation is what turns the
/// contraction into a visible heartbeat.
pub fn pulsation_curve(phase: f64) -> f64 {
    (4.0 / PI) * (4.0 * phase).sin()
}

/// Phase fed to [`pulsation_curve`] for a given frame of the cycle.
pub fn frame_phase(frame_index: usize) -> f64 {
    frame_index as f64 / 10.0 * PI
}
