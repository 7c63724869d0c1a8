//! Drawing-surface capability and draw-command replay.
//!
//! The renderer never touches pixels; it emits [`DrawCommand`] values, and
//! [`execute`] replays them onto whatever implements [`DrawSurface`]. This
//! keeps the pipeline testable without a rasterizer: tests substitute a
//! recording stub for the real canvas.

use crate::color::Rgb;
use crate::math::vec2::Vec2;
use crate::renderer::DrawCommand;

/// Something that can rasterize 2D primitives.
pub trait DrawSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn clear(&mut self, color: Rgb);
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb);
    fn stroke_polygon(&mut self, points: &[Vec2], color: Rgb, width: f32);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgb, width: f32);
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb);
}

/// Replays a command list onto a surface, preserving paint order.
pub fn execute<S: DrawSurface>(commands: &[DrawCommand], surface: &mut S) {
    for command in commands {
        match command {
            DrawCommand::FilledPolygon { points, color } => {
                surface.fill_polygon(points, *color);
            }
            DrawCommand::StrokedPolygon {
                points,
                color,
                width,
            } => {
                surface.stroke_polygon(points, *color, *width);
            }
            DrawCommand::LineSegment {
                from,
                to,
                color,
                width,
            } => {
                surface.draw_line(*from, *to, *color, *width);
            }
        }
    }
}
