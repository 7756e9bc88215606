use std::env;
use std::process;

use softsphere::prelude::*;
use softsphere::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn run() -> Result<(), String> {
    let engine = Engine::new(WINDOW_WIDTH, WINDOW_HEIGHT, Scene::default());
    let frame = engine.render_frame();

    // With an output path argument, render headless and skip the window.
    if let Some(path) = env::args().nth(1) {
        return frame.save_png(&path).map_err(|e| e.to_string());
    }

    let mut window = Window::new("Softsphere - Phong Shading", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut frame_limiter = FrameLimiter::new(&window);

    // The scene is static: the frame is rendered once and re-presented until
    // a close request (or Escape) arrives.
    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::None => {}
        }
        window.present(frame.as_bytes())?;
        frame_limiter.wait_and_get_delta(&window);
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("softsphere: {error}");
        process::exit(-1);
    }
}
