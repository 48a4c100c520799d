// What you SEE:
// • A black window with a white "flashlight" circle in the middle.
// • Hold Left Mouse and drag: the circle follows the cursor. Each new press
//   hides the picture somewhere else.
// • Drag the circle center onto the hidden picture: the whole scene lights
//   up and "WIN!" appears. Move off it and the dark comes back.
// • Switching to another window pauses drawing; ESC quits.

mod canvas;
mod cone;
mod constants;
mod draw;
mod error;
mod frame;
mod input;
mod render;
mod scene;
mod sprite;
mod surface;
mod target;
mod types;
mod view;

use constants::*;
use draw::Drawer;
use error::Error;
use input::PointerTracker;
use sprite::Sprite;
use std::time::{Duration, Instant};
use surface::SharedSurface;
use types::FrameBuffer;
use view::RevealView;

fn load_sprite() -> Sprite {
    match Sprite::open(ASSET_PATH) {
        Ok(sprite) => {
            log::info!("loaded {ASSET_PATH} ({}x{})", sprite.width(), sprite.height());
            sprite
        }
        Err(e) => {
            log::warn!("{e}; using built-in picture");
            Sprite::fallback(FALLBACK_SPRITE_WIDTH, FALLBACK_SPRITE_HEIGHT)
        }
    }
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    /* --- Window + shared surface ---
       Visual: window opens black until the first frame arrives. */
    let mut drawer = Drawer::new(WINDOW_TITLE, VIEWPORT_WIDTH, VIEWPORT_HEIGHT, TARGET_FPS)?;
    let (w, h) = drawer.size();
    log::info!("window opened at {w}x{h}");
    let surface = SharedSurface::new(w, h);

    /* --- Game state ---
       A picture too big for the first window is fatal; later resizes only log. */
    let mut game = RevealView::new(load_sprite());
    game.on_viewport_changed(w as i32, h as i32)?;
    game.resume(surface.clone())?;

    let result = run(&mut drawer, &surface, &mut game, (w, h));

    // Release a render thread waiting for the window before joining it.
    surface.invalidate();
    game.pause();
    result
}

fn run(
    drawer: &mut Drawer,
    surface: &SharedSurface,
    game: &mut RevealView<SharedSurface>,
    (mut w, mut h): (usize, usize),
) -> Result<(), Error> {
    let mut screen = FrameBuffer::new(w, h);
    let mut pointer = PointerTracker::new();

    /* --- Frame-rate report --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Lifecycle: lose focus → pause, regain → resume. */
        let active = drawer.is_active();
        if !active && game.is_running() {
            surface.invalidate();
            game.pause();
        } else if active && !game.is_running() {
            surface.validate();
            game.resume(surface.clone())?;
        }

        /* 2) Resize: new canvases at the new size, recentered cone, new spot. */
        let (nw, nh) = drawer.size();
        if (nw, nh) != (w, h) && nw > 0 && nh > 0 {
            (w, h) = (nw, nh);
            surface.resize(w, h);
            if let Err(e) = game.on_viewport_changed(w as i32, h as i32) {
                log::error!("{e}");
            }
        }

        /* 3) Pointer → cone (and a new hiding spot on press). */
        if let Some(event) = pointer.poll(drawer.mouse_pos(), drawer.left_mouse_down()) {
            if let Err(e) = game.on_pointer(event) {
                log::warn!("{e}");
            }
        }

        /* 4) Show whatever the render thread finished last. */
        if let Some(frame) = surface.take_posted() {
            let shown = std::mem::replace(&mut screen, frame);
            surface.recycle(shown);
            frames_this_second += 1;
        }
        drawer.present(&screen)?;

        /* 5) FPS counter (debug log once per second) */
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            log::debug!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }
    Ok(())
}
