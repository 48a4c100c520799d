// Hand-off point between the render thread and the window.
// The render thread locks a canvas, paints, and posts it; the window side
// takes the posted frame and shows it. Only one frame is ever in flight:
// locking waits until the window has taken the previous one.

use crate::canvas::FrameSink;
use crate::draw::SoftCanvas;
use crate::types::FrameBuffer;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct SurfaceState {
    width: usize,
    height: usize,
    valid: bool,
    posted: Option<FrameBuffer>, // painted, not yet shown
    spare: Option<FrameBuffer>,  // shown, ready to paint again
}

#[derive(Clone, Debug)]
pub struct SharedSurface {
    inner: Arc<(Mutex<SurfaceState>, Condvar)>,
}

impl SharedSurface {
    /// A valid surface of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        let state = SurfaceState { width, height, valid: true, posted: None, spare: None };
        Self { inner: Arc::new((Mutex::new(state), Condvar::new())) }
    }

    fn state(&self) -> MutexGuard<'_, SurfaceState> {
        self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Window side: grab the newest painted frame, if any.
    pub fn take_posted(&self) -> Option<FrameBuffer> {
        let frame = self.state().posted.take();
        if frame.is_some() {
            self.inner.1.notify_all();
        }
        frame
    }

    /// Window side: return a shown frame so its allocation can be painted again.
    pub fn recycle(&self, frame: FrameBuffer) {
        self.state().spare = Some(frame);
    }

    /// New canvases are created at this size from now on.
    pub fn resize(&self, width: usize, height: usize) {
        let mut state = self.state();
        state.width = width;
        state.height = height;
    }

    /// Stop handing out canvases and wake a render thread waiting in `lock_canvas`.
    pub fn invalidate(&self) {
        self.state().valid = false;
        self.inner.1.notify_all();
    }

    pub fn validate(&self) {
        self.state().valid = true;
        self.inner.1.notify_all();
    }
}

impl FrameSink for SharedSurface {
    type Canvas = SoftCanvas;

    fn is_valid(&self) -> bool {
        self.state().valid
    }

    fn lock_canvas(&mut self) -> Option<SoftCanvas> {
        let (lock, cvar) = &*self.inner;
        let guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut state = cvar
            .wait_while(guard, |s| s.valid && s.posted.is_some())
            .unwrap_or_else(PoisonError::into_inner);
        if !state.valid {
            return None;
        }
        let (w, h) = (state.width, state.height);
        let frame = match state.spare.take() {
            Some(fb) if fb.width == w && fb.height == h => fb,
            _ => FrameBuffer::new(w, h),
        };
        Some(SoftCanvas::new(frame))
    }

    fn unlock_canvas_and_post(&mut self, canvas: SoftCanvas) {
        let mut state = self.state();
        if state.valid {
            state.posted = Some(canvas.into_frame());
        }
        drop(state);
        self.inner.1.notify_all();
    }
}
