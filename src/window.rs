use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 800;
pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

/// Wheel clicks to zoom distance.
const WHEEL_ZOOM_STEP: f32 = 0.1;
/// Contrast percentage per arrow keypress.
const CONTRAST_STEP: f32 = 5.0;

/// User intent, translated from raw SDL events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    Resize(u32, u32),
    /// Toggle solid/wireframe rendering.
    ToggleMode,
    /// Cycle to the next model preset.
    NextPreset,
    ToggleStars,
    Reset,
    /// Dump the current frame to a PNG.
    Screenshot,
    ZoomDelta(f32),
    ContrastDelta(f32),
    /// Mouse drag in pixels; `spin` is true while shift is held, switching
    /// horizontal movement from roll (Z) to spin (Y).
    DragRotate { dx: f32, dy: f32, spin: bool },
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time
    /// in milliseconds since the last call.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    texture: sdl2::render::Texture<'static>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
    dragging: bool,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as
        // Window. We ensure texture is dropped before texture_creator by
        // struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture_creator,
            texture,
            event_pump,
            timer_subsystem,
            width,
            height,
            dragging: false,
        })
    }

    /// Drains pending SDL events into user intents.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let shift_held = {
            let keyboard = self.event_pump.keyboard_state();
            keyboard.is_scancode_pressed(Scancode::LShift)
                || keyboard.is_scancode_pressed(Scancode::RShift)
        };

        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(InputEvent::Quit),
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => events.push(InputEvent::Resize(w as u32, h as u32)),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match key {
                    Keycode::Space => events.push(InputEvent::ToggleMode),
                    Keycode::Tab => events.push(InputEvent::NextPreset),
                    Keycode::B => events.push(InputEvent::ToggleStars),
                    Keycode::R => events.push(InputEvent::Reset),
                    Keycode::S => events.push(InputEvent::Screenshot),
                    Keycode::Up => events.push(InputEvent::ContrastDelta(CONTRAST_STEP)),
                    Keycode::Down => events.push(InputEvent::ContrastDelta(-CONTRAST_STEP)),
                    _ => {}
                },
                Event::MouseWheel { y, .. } => {
                    events.push(InputEvent::ZoomDelta(y as f32 * WHEEL_ZOOM_STEP));
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    ..
                } => self.dragging = true,
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => self.dragging = false,
                Event::MouseMotion { xrel, yrel, .. } if self.dragging => {
                    events.push(InputEvent::DragRotate {
                        dx: xrel as f32,
                        dy: yrel as f32,
                        spin: shift_held,
                    });
                }
                _ => {}
            }
        }
        events
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(
            &self.texture,
            None,
            Some(Rect::new(0, 0, self.width, self.height)),
        )?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.width = width;
        self.height = height;
        // SAFETY: Same as in new() - texture_creator outlives texture
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
