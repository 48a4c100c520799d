// The game's face toward the host: size changes, pointer events, pause/resume.
// Input arrives here on the host thread; the render thread only ever reads
// the shared scene.

use crate::canvas::FrameSink;
use crate::cone::Cone;
use crate::error::Error;
use crate::input::PointerEvent;
use crate::render::RenderLoop;
use crate::scene::Scene;
use crate::sprite::Sprite;
use crate::target::place_target;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

/// Dropping or pausing a running view joins the render thread, so a sink
/// that can block in `lock_canvas` has to be released first: call
/// `SharedSurface::invalidate` before `pause` or drop.
pub struct RevealView<S: FrameSink> {
    scene: Arc<Scene>,
    rng: StdRng,
    render: RenderLoop<S>,
}

impl<S: FrameSink + 'static> RevealView<S> {
    pub fn new(sprite: Sprite) -> Self {
        Self::with_rng(sprite, StdRng::from_rng(&mut rand::rng()))
    }

    /// Fixed randomness, for reproducible placement.
    pub fn with_rng(sprite: Sprite, rng: StdRng) -> Self {
        Self { scene: Arc::new(Scene::new(Arc::new(sprite))), rng, render: RenderLoop::new() }
    }

    /// New drawable size: recenter the cone and move the picture somewhere that fits.
    /// If the picture no longer fits, the old placement stays and the error is returned.
    pub fn on_viewport_changed(&mut self, width: i32, height: i32) -> Result<(), Error> {
        self.scene.set_viewport(width, height);
        self.scene.cone().store(Cone::new(width, height));
        log::info!("viewport {width}x{height}");
        self.place()
    }

    /// Finger down: hide the picture somewhere new and jump the cone there.
    /// The cone moves even if the picture could not be placed.
    pub fn on_pointer_down(&mut self, x: i32, y: i32) -> Result<(), Error> {
        let placed = self.place();
        self.scene.cone().update(x, y);
        placed
    }

    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        self.scene.cone().update(x, y);
    }

    /// Route a host pointer event; `Up` changes nothing.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Result<(), Error> {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => {
                self.on_pointer_move(x, y);
                Ok(())
            }
            PointerEvent::Up => Ok(()),
        }
    }

    pub fn resume(&mut self, sink: S) -> Result<(), Error> {
        self.render.start(sink, Arc::clone(&self.scene))
    }

    /// Blocks until the render thread has finished its last frame.
    pub fn pause(&mut self) -> Option<S> {
        self.render.stop()
    }

    pub fn is_running(&self) -> bool {
        self.render.is_running()
    }

    #[cfg(test)]
    pub fn cone(&self) -> Cone {
        self.scene.cone().load()
    }

    #[cfg(test)]
    pub fn target(&self) -> crate::target::Target {
        self.scene.target().load()
    }

    fn place(&mut self) -> Result<(), Error> {
        let (w, h) = self.scene.viewport();
        let sprite = self.scene.sprite();
        let target = place_target(&mut self.rng, w, h, sprite.width(), sprite.height())?;
        self.scene.target().store(target);
        Ok(())
    }
}
