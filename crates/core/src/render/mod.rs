use crate::geometry::{Frame, Rgb};

/// Drawable surface capability consumed from the host. The engine only
/// needs two primitives: clear everything, and fill an axis-aligned square.
pub trait Surface {
    fn clear(&mut self, color: Rgb);

    /// Fills a square with side `size` whose top-left corner is at
    /// `(x, y)` in surface coordinates.
    fn fill_square(&mut self, x: f64, y: f64, size: u32, color: Rgb);
}

/// CPU-side surface backed by one `u32` per pixel (`0x00RRGGBB`, row
/// major). Out-of-bounds fills are clipped.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            self.pixels.get(y as usize * self.width as usize + x as usize).copied()
        } else {
            None
        }
    }

    fn set(&mut self, x: i64, y: i64, value: u32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = value;
    }
}

impl Surface for PixelSurface {
    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_pixel());
    }

    fn fill_square(&mut self, x: f64, y: f64, size: u32, color: Rgb) {
        let value = color.to_pixel();
        let left = x.floor() as i64;
        let top = y.floor() as i64;
        for dy in 0..size as i64 {
            for dx in 0..size as i64 {
                self.set(left + dx, top + dy, value);
            }
        }
    }
}

/// Draws one precomputed frame: clear to the background color, then one
/// filled square per particle in frame order. No blending, no depth
/// ordering; overlaps just overwrite.
pub fn draw_frame(surface: &mut dyn Surface, frame: &Frame, color: Rgb, background: Rgb) {
    surface.clear(background);
    for point in frame.points() {
        surface.fill_square(point.x, point.y, point.size, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SizedPoint;

    const INK: Rgb = Rgb::new(0xf7, 0x60, 0x70);

    #[test]
    fn clear_floods_every_pixel() {
        let mut surface = PixelSurface::new(4, 3);
        surface.clear(INK);
        assert!(surface.pixels().iter().all(|&p| p == INK.to_pixel()));
    }

    #[test]
    fn fill_square_covers_the_expected_pixels() {
        let mut surface = PixelSurface::new(8, 8);
        surface.fill_square(2.6, 3.2, 2, INK);
        assert_eq!(surface.pixel(2, 3), Some(INK.to_pixel()));
        assert_eq!(surface.pixel(3, 4), Some(INK.to_pixel()));
        assert_eq!(surface.pixel(4, 3), Some(0));
        assert_eq!(surface.pixel(1, 3), Some(0));
    }

    #[test]
    fn out_of_bounds_fills_are_clipped() {
        let mut surface = PixelSurface::new(4, 4);
        surface.fill_square(-10.0, -10.0, 3, INK);
        surface.fill_square(3.0, 3.0, 3, INK);
        assert_eq!(surface.pixel(3, 3), Some(INK.to_pixel()));
        assert_eq!(surface.pixel(0, 0), Some(0));
    }

    #[test]
    fn draw_frame_clears_then_plots_particles() {
        let mut surface = PixelSurface::new(10, 10);
        let frame = Frame::new(vec![SizedPoint::new(5.0, 5.0, 1)]);
        draw_frame(&mut surface, &frame, INK, Rgb::new(1, 2, 3));
        assert_eq!(surface.pixel(5, 5), Some(INK.to_pixel()));
        assert_eq!(surface.pixel(0, 0), Some(Rgb::new(1, 2, 3).to_pixel()));
    }
}
