//! Frame rendering: the single entry point that turns a mesh and a frame
//! config into an ordered list of 2D draw commands.
//!
//! Two strategies, selected by [`FrameConfig::solid`]:
//!
//! - **Solid**: transform, near-plane reject, per-face lighting, painter's
//!   algorithm depth sort, then filled polygons (with outlines) emitted
//!   back to front.
//! - **Wireframe**: every face traversed as a closed loop, each segment
//!   transformed, projected, and emitted immediately in mesh order. No
//!   lighting, no sorting.
//!
//! The pipeline holds no state between frames; everything here is a pure
//! function of its inputs.

use crate::color::Rgb;
use crate::config::FrameConfig;
use crate::light::{face_normal, shade, shade_color};
use crate::math::vec2::Vec2;
use crate::math::vec3::{centroid, Vec3};
use crate::mesh::Mesh;
use crate::projection::{project, to_screen, NEAR_PLANE};
use crate::sorting::sort_back_to_front;
use crate::transform::transform_vertex;

/// A 2D primitive ready for a drawing surface, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FilledPolygon {
        points: Vec<Vec2>,
        color: Rgb,
    },
    StrokedPolygon {
        points: Vec<Vec2>,
        color: Rgb,
        width: f32,
    },
    LineSegment {
        from: Vec2,
        to: Vec2,
        color: Rgb,
        width: f32,
    },
}

/// A face after transform and lighting, awaiting the depth sort.
///
/// Frame-scoped: built fresh every tick and discarded once its draw commands
/// are emitted.
#[derive(Clone, Debug)]
pub struct ShadedFace {
    /// Camera-space vertices.
    pub vertices: Vec<Vec3>,
    /// Centroid z, the painter's-algorithm sort key.
    pub depth: f32,
    /// Resolved fill color.
    pub color: Rgb,
    /// Unit face normal (zero for degenerate faces).
    pub normal: Vec3,
}

/// Renders one frame, returning draw commands in paint order.
///
/// The mesh is borrowed read-only and must already be validated; the config
/// is an immutable snapshot for this frame.
pub fn render_frame(mesh: &Mesh, cfg: &FrameConfig, width: u32, height: u32) -> Vec<DrawCommand> {
    if cfg.solid {
        solid_frame(mesh, cfg, width, height)
    } else {
        wireframe_frame(mesh, cfg, width, height)
    }
}

fn solid_frame(mesh: &Mesh, cfg: &FrameConfig, width: u32, height: u32) -> Vec<DrawCommand> {
    let mut shaded: Vec<ShadedFace> = Vec::with_capacity(mesh.faces().len());

    'faces: for face in mesh.faces() {
        // Edges are wireframe-only; nothing degenerate reaches the shader.
        if face.len() < 3 {
            continue;
        }

        let mut vertices = Vec::with_capacity(face.len());
        for &index in &face.0 {
            let v = transform_vertex(mesh.vertices()[index], cfg);
            // One vertex at or behind the near plane rejects the whole face.
            if v.z <= NEAR_PLANE {
                continue 'faces;
            }
            vertices.push(v);
        }

        let center = centroid(&vertices);
        let normal = face_normal(vertices[0], vertices[1], vertices[2]);
        let brightness = shade(normal, center.z, cfg.contrast);
        let color = shade_color(brightness, cfg.fill_color, cfg.contrast);

        shaded.push(ShadedFace {
            vertices,
            depth: center.z,
            color,
            normal,
        });
    }

    sort_back_to_front(&mut shaded);

    let mut commands = Vec::with_capacity(shaded.len() * 2);
    for face in &shaded {
        let points: Vec<Vec2> = face
            .vertices
            .iter()
            .map(|&v| to_screen(project(v), width, height))
            .collect();
        commands.push(DrawCommand::FilledPolygon {
            points: points.clone(),
            color: face.color,
        });
        commands.push(DrawCommand::StrokedPolygon {
            points,
            color: cfg.stroke_color,
            width: cfg.stroke_width,
        });
    }
    commands
}

fn wireframe_frame(mesh: &Mesh, cfg: &FrameConfig, width: u32, height: u32) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    for face in mesh.faces() {
        let n = face.len();
        // Closing the loop on a 2-vertex face would retrace the same segment.
        let segments = if n == 2 { 1 } else { n };

        for i in 0..segments {
            let a = transform_vertex(mesh.vertices()[face.0[i]], cfg);
            let b = transform_vertex(mesh.vertices()[face.0[(i + 1) % n]], cfg);
            // Same clip rule as the solid path, applied per segment.
            if a.z <= NEAR_PLANE || b.z <= NEAR_PLANE {
                continue;
            }
            commands.push(DrawCommand::LineSegment {
                from: to_screen(project(a), width, height),
                to: to_screen(project(b), width, height),
                color: cfg.fill_color,
                width: cfg.stroke_width,
            });
        }
    }
    commands
}
