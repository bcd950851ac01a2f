use std::f64::consts::PI;

use rand::Rng;

use crate::geometry::Point;

/// Evaluates the heart parametric curve at `t` (radians in `[0, 2π)`),
/// scaled by `scale` and translated so the curve is centered on `center`.
///
/// Sampling uniform random `t` yields non-uniform arc-length density with
/// more points near the cusps; that clustering is the intended texture.
pub fn heart_function(t: f64, scale: f64, center: Point) -> Point {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos()
        - 5.0 * (2.0 * t).cos()
        - 2.0 * (3.0 * t).cos()
        - (4.0 * t).cos());
    Point::new(x * scale + center.x, y * scale + center.y)
}

/// Draws a uniform random curve parameter in `[0, 2π)`.
pub fn random_parameter<R: Rng>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * 2.0 * PI
}

/// Moves `point` toward `center` by an independent exponentially
/// distributed ratio per axis (`ratio = -beta * ln(U)`, `U` in `(0, 1]`).
/// Larger `beta` spreads the scatter deeper into the interior.
pub fn scatter_inside<R: Rng>(point: Point, center: Point, beta: f64, rng: &mut R) -> Point {
    // 1 - gen() maps the [0, 1) draw into (0, 1] so the log stays finite.
    let ratio_x = -beta * (1.0 - rng.gen::<f64>()).ln();
    let ratio_y = -beta * (1.0 - rng.gen::<f64>()).ln();
    Point::new(
        point.x - ratio_x * (point.x - center.x),
        point.y - ratio_y * (point.y - center.y),
    )
}
