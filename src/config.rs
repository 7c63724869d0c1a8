//! Per-frame render configuration and the control state that produces it.
//!
//! [`ControlState`] is the mutable owner of everything the user can poke:
//! spin speeds, base angles, the auto-rotation accumulators, zoom, contrast,
//! colors, and mode flags. Once per tick the app calls
//! [`ControlState::snapshot`] to freeze an immutable [`FrameConfig`] that the
//! pipeline reads; the pipeline itself never touches shared state.

use std::f32::consts::PI;

use crate::color::Rgb;

const DEFAULT_FILL: Rgb = Rgb::new(0xFF, 0x0F, 0x77);
const DEFAULT_STROKE: Rgb = Rgb::new(0x0A, 0x0A, 0x0A);

const ZOOM_MIN: f32 = 0.5;
const ZOOM_MAX: f32 = 5.0;

/// Radians of rotation per pixel of mouse drag.
const DRAG_SENSITIVITY: f32 = 0.005;

/// Immutable parameters for one rendered frame.
///
/// The angles are the effective rotations: user base angle plus the
/// accumulated auto-rotation for each axis, already summed by the snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameConfig {
    /// Rotation around the X axis, radians.
    pub angle_x: f32,
    /// Rotation around the Y axis, radians.
    pub angle_y: f32,
    /// Rotation around the Z axis, radians.
    pub angle_z: f32,
    /// Camera distance: every vertex is pushed this far along +z.
    pub zoom: f32,
    /// Lighting contrast percentage in [0, 100].
    pub contrast: f32,
    /// Solid shading when true, wireframe when false.
    pub solid: bool,
    /// Base color of the model (shaded fills, wireframe lines).
    pub fill_color: Rgb,
    /// Polygon outline color in solid mode.
    pub stroke_color: Rgb,
    /// Outline and wireframe line width in pixels.
    pub stroke_width: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            angle_x: 0.0,
            angle_y: 0.0,
            angle_z: 0.0,
            zoom: 1.0,
            contrast: 70.0,
            solid: true,
            fill_color: DEFAULT_FILL,
            stroke_color: DEFAULT_STROKE,
            stroke_width: 1.0,
        }
    }
}

/// Owner of all user-adjustable state, including the auto-rotation
/// accumulators.
#[derive(Clone, Debug)]
pub struct ControlState {
    speed_x: f32,
    speed_y: f32,
    speed_z: f32,
    angle_x: f32,
    angle_y: f32,
    angle_z: f32,
    auto_x: f32,
    auto_y: f32,
    auto_z: f32,
    zoom: f32,
    contrast: f32,
    solid: bool,
    fill_color: Rgb,
    stroke_color: Rgb,
    stroke_width: f32,
    stars_enabled: bool,
    star_speed: f32,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            speed_x: 0.10,
            speed_y: 0.10,
            speed_z: 0.0,
            angle_x: 0.0,
            angle_y: 0.0,
            angle_z: 0.0,
            auto_x: 0.0,
            auto_y: 0.0,
            auto_z: 0.0,
            zoom: 1.0,
            contrast: 70.0,
            solid: true,
            fill_color: DEFAULT_FILL,
            stroke_color: DEFAULT_STROKE,
            stroke_width: 1.0,
            stars_enabled: true,
            star_speed: 0.3,
        }
    }
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the auto-rotation accumulators by `dt` seconds.
    ///
    /// Each axis gains `PI * dt * speed` radians, so a speed of 1.0 is half a
    /// turn per second.
    pub fn advance(&mut self, dt: f32) {
        self.auto_x += PI * dt * self.speed_x;
        self.auto_y += PI * dt * self.speed_y;
        self.auto_z += PI * dt * self.speed_z;
    }

    /// Freezes the current state into the per-frame config.
    pub fn snapshot(&self) -> FrameConfig {
        FrameConfig {
            angle_x: self.angle_x + self.auto_x,
            angle_y: self.angle_y + self.auto_y,
            angle_z: self.angle_z + self.auto_z,
            zoom: self.zoom,
            contrast: self.contrast,
            solid: self.solid,
            fill_color: self.fill_color,
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
        }
    }

    /// Applies a mouse drag to the base angles.
    ///
    /// Vertical movement tilts around X. Horizontal movement rolls around Z,
    /// or spins around Y when `spin` is held (shift).
    pub fn drag_rotate(&mut self, dx: f32, dy: f32, spin: bool) {
        if spin {
            self.angle_y += dx * DRAG_SENSITIVITY;
        } else {
            self.angle_z += dx * DRAG_SENSITIVITY;
        }
        self.angle_x += dy * DRAG_SENSITIVITY;
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn adjust_contrast(&mut self, delta: f32) {
        self.contrast = (self.contrast + delta).clamp(0.0, 100.0);
    }

    pub fn toggle_mode(&mut self) {
        self.solid = !self.solid;
    }

    pub fn toggle_stars(&mut self) {
        self.stars_enabled = !self.stars_enabled;
    }

    pub fn is_solid(&self) -> bool {
        self.solid
    }

    pub fn stars_enabled(&self) -> bool {
        self.stars_enabled
    }

    pub fn star_speed(&self) -> f32 {
        self.star_speed
    }

    /// Restores every control to its startup value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn advance_accumulates_auto_rotation() {
        let mut state = ControlState::new();
        let dt = 1.0 / 60.0;
        state.advance(dt);
        let cfg = state.snapshot();
        assert_relative_eq!(cfg.angle_x, PI * dt * 0.10, epsilon = 1e-6);
        assert_relative_eq!(cfg.angle_y, PI * dt * 0.10, epsilon = 1e-6);
        assert_relative_eq!(cfg.angle_z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn snapshot_sums_base_and_auto_angles() {
        let mut state = ControlState::new();
        state.drag_rotate(0.0, 100.0, false); // tilt X by 0.5 rad
        state.advance(1.0);
        let cfg = state.snapshot();
        assert_relative_eq!(cfg.angle_x, 0.5 + PI * 0.10, epsilon = 1e-5);
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut state = ControlState::new();
        state.zoom_by(100.0);
        assert_relative_eq!(state.snapshot().zoom, ZOOM_MAX);
        state.zoom_by(-100.0);
        assert_relative_eq!(state.snapshot().zoom, ZOOM_MIN);
    }

    #[test]
    fn contrast_clamps_to_percentage() {
        let mut state = ControlState::new();
        state.adjust_contrast(1000.0);
        assert_relative_eq!(state.snapshot().contrast, 100.0);
        state.adjust_contrast(-1000.0);
        assert_relative_eq!(state.snapshot().contrast, 0.0);
    }

    #[test]
    fn drag_horizontal_rolls_or_spins() {
        let mut state = ControlState::new();
        state.drag_rotate(10.0, 0.0, false);
        assert_relative_eq!(state.snapshot().angle_z, 10.0 * DRAG_SENSITIVITY);
        state.drag_rotate(10.0, 0.0, true);
        assert_relative_eq!(state.snapshot().angle_y, 10.0 * DRAG_SENSITIVITY);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = ControlState::new();
        state.advance(3.0);
        state.toggle_mode();
        state.zoom_by(1.0);
        state.reset();
        assert_eq!(state.snapshot(), FrameConfig::default());
    }
}
