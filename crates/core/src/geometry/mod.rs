use serde::{Deserialize, Serialize};

/// Solid color used for the particle fill and the surface clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `0x00RRGGBB` for raw pixel buffers.
    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// A position on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Exact-identity dedup key for the contour and diffusion sets.
    pub fn bit_key(self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }

    /// Nearest-integer dedup key used by the coarser halo layer.
    pub fn rounded_key(self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

/// A particle ready to draw: a position plus the side length of the square
/// that represents it, restricted to 1, 2 or 3 pixels depending on layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizedPoint {
    pub x: f64,
    pub y: f64,
    pub size: u32,
}

impl SizedPoint {
    pub const fn new(x: f64, y: f64, size: u32) -> Self {
        Self { x, y, size }
    }
}

/// One instant of the animation. The point order is the draw order; the
/// content never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    points: Vec<SizedPoint>,
}

impl Frame {
    pub(crate) fn new(points: Vec<SizedPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SizedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The fixed loop of precomputed frames. Read-only for the lifetime of the
/// engine; only the index into it moves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationCycle {
    frames: Vec<Frame>,
}

impl AnimationCycle {
    pub(crate) fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Returns the frame for `index`, wrapping around the cycle length.
    pub fn frame(&self, index: usize) -> &Frame {
        &self.frames[index % self.frames.len()]
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_color_channels() {
        assert_eq!(Rgb::new(0xf7, 0x60, 0x70).to_pixel(), 0x00f7_6070);
        assert_eq!(Rgb::BLACK.to_pixel(), 0);
    }

    #[test]
    fn rounded_key_quantises_to_nearest_integer() {
        assert_eq!(Point::new(1.4, -2.6).rounded_key(), (1, -3));
        assert_eq!(Point::new(1.6, -2.4).rounded_key(), (2, -2));
    }

    #[test]
    fn bit_key_distinguishes_close_floats() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(1.0 + f64::EPSILON, 2.0);
        assert_ne!(a.bit_key(), b.bit_key());
        assert_eq!(a.bit_key(), Point::new(1.0, 2.0).bit_key());
    }

    #[test]
    fn cycle_indexing_wraps() {
        let cycle = AnimationCycle::new(vec![
            Frame::new(vec![SizedPoint::new(0.0, 0.0, 1)]),
            Frame::new(vec![]),
        ]);
        assert_eq!(cycle.frame(0).len(), 1);
        assert_eq!(cycle.frame(2).len(), 1);
        assert_eq!(cycle.frame(3).len(), 0);
    }
}
