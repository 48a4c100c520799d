// The render thread: draws frames back to back until told to stop.

use crate::canvas::FrameSink;
use crate::error::Error;
use crate::frame::draw_frame;
use crate::scene::Scene;
use crate::types::CirclePath;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

/// Owns the render thread. STOPPED until `start`, back to STOPPED after `stop`.
pub struct RenderLoop<S: FrameSink> {
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<S>>,
}

impl<S: FrameSink + 'static> RenderLoop<S> {
    pub fn new() -> Self {
        Self { running: Arc::new(AtomicBool::new(false)), worker: None }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Spawn the render thread drawing `scene` into `sink`.
    /// Already running: the call is ignored and `sink` is dropped.
    pub fn start(&mut self, sink: S, scene: Arc<Scene>) -> Result<(), Error> {
        if self.worker.is_some() {
            log::warn!("render loop already running; start ignored");
            return Ok(());
        }
        self.running.store(true, Ordering::Release);
        let running = Arc::clone(&self.running);
        let handle = thread::Builder::new()
            .name("render-loop".into())
            .spawn(move || run(sink, &scene, &running))
            .map_err(|e| {
                self.running.store(false, Ordering::Release);
                Error::RenderThread(e.to_string())
            })?;
        self.worker = Some(handle);
        log::info!("render loop started");
        Ok(())
    }

    /// Ask the thread to finish its current frame and wait for it.
    /// Hands the sink back; None if the loop wasn't running or the thread panicked.
    pub fn stop(&mut self) -> Option<S> {
        let handle = self.worker.take()?;
        self.running.store(false, Ordering::Release);
        match handle.join() {
            Ok(sink) => {
                log::info!("render loop stopped");
                Some(sink)
            }
            Err(_) => {
                log::error!("render thread panicked");
                None
            }
        }
    }
}

/// Dropping a running loop joins the thread like `stop`. A sink that blocks in
/// `lock_canvas` must be released first (see `SharedSurface::invalidate`).
impl<S: FrameSink> Drop for RenderLoop<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.worker.take() {
            self.running.store(false, Ordering::Release);
            if handle.join().is_err() {
                log::error!("render thread panicked");
            }
        }
    }
}

fn run<S: FrameSink>(mut sink: S, scene: &Scene, running: &AtomicBool) -> S {
    let mut path = CirclePath::new();
    let mut was_winning = false;
    while running.load(Ordering::Acquire) {
        if !sink.is_valid() {
            thread::yield_now();
            continue;
        }
        let Some(mut canvas) = sink.lock_canvas() else {
            continue;
        };
        let snapshot = scene.snapshot();
        let won = draw_frame(&mut canvas, &mut path, &snapshot, scene.sprite());
        if won != was_winning {
            log::trace!("win state -> {won} at ({}, {})", snapshot.cone.x, snapshot.cone.y);
            was_winning = won;
        }
        sink.unlock_canvas_and_post(canvas);
    }
    sink
}
