use polyview::prelude::*;

const BACKGROUND: Rgb = Rgb::new(0x03, 0x03, 0x17);

/// Loads a mesh from a user-supplied file, picking the format by extension.
fn load_mesh(path: &str) -> Result<Mesh, MeshError> {
    if path.ends_with(".obj") {
        Mesh::from_obj(path)
    } else {
        Mesh::from_json_file(path)
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut window = Window::new("Polyview", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut canvas = Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut stars = StarField::new(STAR_COUNT, WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut controls = ControlState::new();
    let mut preset = Preset::default();
    let mut mesh = match std::env::args().nth(1) {
        Some(path) => {
            let mesh = load_mesh(&path).map_err(|e| e.to_string())?;
            log::info!(
                "loaded {} ({} vertices, {} faces)",
                path,
                mesh.vertices().len(),
                mesh.faces().len()
            );
            mesh
        }
        None => {
            log::info!("loaded {} preset", preset.name());
            preset.mesh()
        }
    };

    let mut limiter = FrameLimiter::new(&window);
    let mut frame_index: u64 = 0;
    let mut is_running = true;

    while is_running {
        for event in window.poll_events() {
            match event {
                InputEvent::Quit => is_running = false,
                InputEvent::Resize(w, h) => {
                    window.resize(w, h)?;
                    canvas = Canvas::new(w, h);
                    stars = StarField::new(STAR_COUNT, w, h);
                }
                InputEvent::ToggleMode => {
                    controls.toggle_mode();
                    log::info!(
                        "render mode: {}",
                        if controls.is_solid() { "solid" } else { "wireframe" }
                    );
                }
                InputEvent::NextPreset => {
                    preset = preset.next();
                    mesh = preset.mesh();
                    log::info!("loaded {} preset", preset.name());
                }
                InputEvent::ToggleStars => controls.toggle_stars(),
                InputEvent::Reset => controls.reset(),
                InputEvent::Screenshot => {
                    let path = format!("polyview-{frame_index:06}.png");
                    match canvas.save_png(&path) {
                        Ok(()) => log::info!("saved frame to {path}"),
                        Err(e) => log::error!("failed to save {path}: {e}"),
                    }
                }
                InputEvent::ZoomDelta(delta) => controls.zoom_by(delta),
                InputEvent::ContrastDelta(delta) => controls.adjust_contrast(delta),
                InputEvent::DragRotate { dx, dy, spin } => controls.drag_rotate(dx, dy, spin),
            }
        }

        let delta_ms = limiter.wait_and_get_delta(&window);
        let dt = delta_ms as f32 / 1000.0;
        controls.advance(dt);

        canvas.clear(BACKGROUND);
        if controls.stars_enabled() {
            stars.update(dt, controls.star_speed(), canvas.width(), canvas.height());
            stars.draw(&mut canvas);
        }

        let cfg = controls.snapshot();
        let commands = render_frame(&mesh, &cfg, canvas.width(), canvas.height());
        execute(&commands, &mut canvas);

        window.present(canvas.as_bytes())?;
        frame_index += 1;
    }

    Ok(())
}
