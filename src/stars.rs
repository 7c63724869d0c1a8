//! Parallax star-field backdrop.
//!
//! Purely decorative: stars scroll right to left behind the model, with
//! depth driving brightness, size, and speed. Drawn directly onto the
//! surface before the frame's draw commands, never through the pipeline.

use rand::Rng;

use crate::color::Rgb;
use crate::surface::DrawSurface;

pub const STAR_COUNT: usize = 200;

/// How far past the left edge a star may drift before wrapping.
const WRAP_MARGIN: f32 = 10.0;

struct Star {
    x: f32,
    y: f32,
    /// 0 = far, 1 = near.
    depth: f32,
    size: f32,
}

pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn new(count: usize, width: u32, height: u32) -> Self {
        let mut rng = rand::thread_rng();
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0.0..width as f32),
                y: rng.gen_range(0.0..height as f32),
                depth: rng.gen_range(0.0..1.0),
                size: rng.gen_range(0.5..2.5),
            })
            .collect();
        Self { stars }
    }

    /// Scrolls stars leftward, nearer ones faster, wrapping at the left edge.
    pub fn update(&mut self, dt: f32, speed: f32, width: u32, height: u32) {
        let mut rng = rand::thread_rng();
        for star in &mut self.stars {
            let velocity = (50.0 + star.depth * 150.0) * speed;
            star.x -= velocity * dt;

            if star.x < -WRAP_MARGIN {
                star.x = width as f32 + WRAP_MARGIN;
                star.y = rng.gen_range(0.0..height as f32);
            }
        }
    }

    pub fn draw<S: DrawSurface>(&self, surface: &mut S) {
        for star in &self.stars {
            let brightness = (star.depth * 255.0) as u8;
            let color = Rgb::new(brightness, brightness, brightness);
            let side = (star.size * (0.5 + star.depth * 1.5)).round().max(1.0) as i32;
            surface.fill_rect(
                star.x.round() as i32 - side / 2,
                star.y.round() as i32 - side / 2,
                side,
                side,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_requested_count_inside_surface() {
        let field = StarField::new(50, 800, 600);
        assert_eq!(field.stars.len(), 50);
        assert!(field
            .stars
            .iter()
            .all(|s| s.x >= 0.0 && s.x < 800.0 && s.y >= 0.0 && s.y < 600.0));
    }

    #[test]
    fn stars_scroll_left() {
        let mut field = StarField::new(20, 800, 600);
        let before: Vec<f32> = field.stars.iter().map(|s| s.x).collect();
        field.update(0.1, 1.0, 800, 600);
        for (star, x_before) in field.stars.iter().zip(before) {
            assert!(star.x < x_before);
        }
    }

    #[test]
    fn offscreen_star_wraps_to_right_edge() {
        let mut field = StarField::new(1, 800, 600);
        field.stars[0].x = -WRAP_MARGIN - 1.0;
        field.stars[0].depth = 0.0; // slowest star still wraps
        field.update(1.0 / 60.0, 1.0, 800, 600);
        assert!(field.stars[0].x > 800.0);
    }

    #[test]
    fn nearer_stars_move_faster() {
        let mut field = StarField::new(2, 800, 600);
        field.stars[0].x = 400.0;
        field.stars[0].depth = 0.0;
        field.stars[1].x = 400.0;
        field.stars[1].depth = 1.0;
        field.update(0.1, 1.0, 800, 600);
        assert!(field.stars[1].x < field.stars[0].x);
    }
}
