//! A CPU-based software-rendered 3D polygon viewer.
//!
//! This crate renders meshes of arbitrary polygons with per-face lighting
//! and painter's-algorithm depth sorting, entirely on the CPU. SDL2 is used
//! only for window management and display.
//!
//! # Quick Start
//!
//! ```ignore
//! use polyview::prelude::*;
//!
//! let mesh = Preset::Cube.mesh();
//! let cfg = FrameConfig::default();
//! let commands = render_frame(&mesh, &cfg, 800, 800);
//! ```

pub mod color;
pub mod config;
pub mod light;
pub mod math;
pub mod mesh;
pub mod presets;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod sorting;
pub mod stars;
pub mod surface;
pub mod transform;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use color::Rgb;
pub use config::{ControlState, FrameConfig};
pub use mesh::{Face, Mesh, MeshError};
pub use renderer::{render_frame, DrawCommand};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use polyview::prelude::*;
/// ```
pub mod prelude {
    // Colors
    pub use crate::color::Rgb;

    // Config
    pub use crate::config::{ControlState, FrameConfig};

    // Mesh
    pub use crate::mesh::{Face, Mesh, MeshError};
    pub use crate::presets::Preset;

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::raster::Canvas;
    pub use crate::renderer::{render_frame, DrawCommand};
    pub use crate::stars::{StarField, STAR_COUNT};
    pub use crate::surface::{execute, DrawSurface};

    // Window
    pub use crate::window::{
        FrameLimiter, InputEvent, Window, FPS, WINDOW_HEIGHT, WINDOW_WIDTH,
    };
}
