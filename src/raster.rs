//! Software canvas: an ARGB8888 pixel buffer implementing [`DrawSurface`].
//!
//! Polygons are filled with an even-odd scanline pass (span intersections per
//! row, sorted, filled in pairs) and lines are drawn with Bresenham's
//! algorithm using a square pen for widths above one pixel. The buffer is
//! presented directly as an SDL2 streaming texture and can be dumped to PNG.

use std::path::Path;

use crate::color::Rgb;
use crate::math::vec2::Vec2;
use crate::surface::DrawSurface;

pub struct Canvas {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0xFF00_0000; (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, argb: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.pixels[(y as u32 * self.width + x as u32) as usize] = argb;
        }
    }

    /// Returns the pixel at (x, y), or None if out of bounds.
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Fills a horizontal run of pixels on row `y`, clamped to the buffer.
    fn fill_scanline(&mut self, y: i32, x_left: i32, x_right: i32, argb: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x_left = x_left.max(0);
        let x_right = x_right.min(self.width as i32 - 1);
        let row = y as u32 * self.width;
        for x in x_left..=x_right {
            self.pixels[(row + x as u32) as usize] = argb;
        }
    }

    /// Stamps a square pen of the given side length centered at (x, y).
    fn stamp(&mut self, x: i32, y: i32, pen: i32, argb: u32) {
        if pen <= 1 {
            self.set_pixel(x, y, argb);
            return;
        }
        let half = pen / 2;
        for dy in -half..(pen - half) {
            for dx in -half..(pen - half) {
                self.set_pixel(x + dx, y + dy, argb);
            }
        }
    }

    /// Draws a line with Bresenham's algorithm.
    ///
    /// The error term tracks the distance between the ideal line and the
    /// current pixel; when it accumulates past the threshold for an axis we
    /// step along that axis, possibly diagonally.
    fn bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, pen: i32, argb: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.stamp(x, y, pen, argb);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += step_x;
            }
            if e2 < dx {
                err += dx;
                y += step_y;
            }
        }
    }

    /// The buffer as raw ARGB8888 bytes, for the SDL streaming texture.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.pixels.len() * 4)
        }
    }

    /// Writes the current frame to a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for &pixel in &self.pixels {
            rgba.push((pixel >> 16) as u8);
            rgba.push((pixel >> 8) as u8);
            rgba.push(pixel as u8);
            rgba.push((pixel >> 24) as u8);
        }
        image::save_buffer(
            path,
            &rgba,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )
    }
}

impl DrawSurface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_argb());
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let argb = color.to_argb();

        let min_y = points.iter().fold(f32::INFINITY, |m, p| m.min(p.y));
        let max_y = points.iter().fold(f32::NEG_INFINITY, |m, p| m.max(p.y));
        let y_start = (min_y.floor() as i32).max(0);
        let y_end = (max_y.ceil() as i32).min(self.height as i32 - 1);

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in y_start..=y_end {
            // Sample at the row center so edges landing exactly on integer
            // rows are counted once.
            let scan_y = y as f32 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                if (a.y <= scan_y && b.y > scan_y) || (b.y <= scan_y && a.y > scan_y) {
                    let t = (scan_y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(f32::total_cmp);
            for span in crossings.chunks_exact(2) {
                self.fill_scanline(y, span[0].round() as i32, span[1].round() as i32, argb);
            }
        }
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Rgb, width: f32) {
        if points.len() < 2 {
            return;
        }
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            self.draw_line(a, b, color, width);
        }
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgb, width: f32) {
        let pen = (width.round() as i32).max(1);
        self.bresenham(
            from.x.round() as i32,
            from.y.round() as i32,
            to.x.round() as i32,
            to.y.round() as i32,
            pen,
            color.to_argb(),
        );
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let argb = color.to_argb();
        for dy in 0..h {
            self.fill_scanline(y + dy, x, x + w - 1, argb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn clear_floods_the_buffer() {
        let mut canvas = Canvas::new(4, 4);
        canvas.clear(RED);
        assert_eq!(canvas.pixel_at(0, 0), Some(RED.to_argb()));
        assert_eq!(canvas.pixel_at(3, 3), Some(RED.to_argb()));
    }

    #[test]
    fn fill_polygon_covers_interior_not_exterior() {
        let mut canvas = Canvas::new(100, 100);
        let triangle = [
            Vec2::new(10.0, 10.0),
            Vec2::new(60.0, 10.0),
            Vec2::new(10.0, 60.0),
        ];
        canvas.fill_polygon(&triangle, RED);
        assert_eq!(canvas.pixel_at(20, 15), Some(RED.to_argb()));
        assert_eq!(canvas.pixel_at(90, 90), Some(0xFF00_0000));
    }

    #[test]
    fn fill_polygon_handles_concave_shapes() {
        // An L shape: the notch must stay empty.
        let mut canvas = Canvas::new(100, 100);
        let l_shape = [
            Vec2::new(10.0, 10.0),
            Vec2::new(30.0, 10.0),
            Vec2::new(30.0, 50.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(50.0, 70.0),
            Vec2::new(10.0, 70.0),
        ];
        canvas.fill_polygon(&l_shape, RED);
        assert_eq!(canvas.pixel_at(20, 40), Some(RED.to_argb()));
        assert_eq!(canvas.pixel_at(45, 20), Some(0xFF00_0000));
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut canvas = Canvas::new(50, 50);
        canvas.draw_line(Vec2::new(5.0, 5.0), Vec2::new(40.0, 30.0), RED, 1.0);
        assert_eq!(canvas.pixel_at(5, 5), Some(RED.to_argb()));
        assert_eq!(canvas.pixel_at(40, 30), Some(RED.to_argb()));
    }

    #[test]
    fn wide_pen_thickens_the_line() {
        let mut canvas = Canvas::new(50, 50);
        canvas.draw_line(Vec2::new(10.0, 10.0), Vec2::new(40.0, 10.0), RED, 3.0);
        assert_eq!(canvas.pixel_at(20, 9), Some(RED.to_argb()));
        assert_eq!(canvas.pixel_at(20, 11), Some(RED.to_argb()));
    }

    #[test]
    fn drawing_off_canvas_is_clipped_silently() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill_rect(-5, -5, 10, 10, RED);
        canvas.draw_line(Vec2::new(-10.0, 5.0), Vec2::new(30.0, 5.0), RED, 1.0);
        assert_eq!(canvas.pixel_at(0, 0), Some(RED.to_argb()));
        assert_eq!(canvas.pixel_at(19, 5), Some(RED.to_argb()));
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill_polygon(&[Vec2::new(1.0, 1.0), Vec2::new(5.0, 5.0)], RED);
        assert_eq!(canvas.pixel_at(3, 3), Some(0xFF00_0000));
    }
}
