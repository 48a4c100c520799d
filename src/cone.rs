// The flashlight cone: a circle that follows the pointer.
// Written by the input thread, read by the render thread once per frame.

use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cone {
    pub x: i32,
    pub y: i32,
    pub radius: i32, // fixed for the lifetime of a viewport size
}

impl Cone {
    /// Center on the viewport; radius is a third of half the narrower side.
    pub fn new(viewport_width: i32, viewport_height: i32) -> Self {
        let x = viewport_width / 2;
        let y = viewport_height / 2;
        let radius = if viewport_width <= viewport_height { x / 3 } else { y / 3 };
        Self { x, y, radius }
    }

    /// Move the center. No clamping: the cone may leave the viewport.
    pub fn update(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

#[inline]
pub(crate) fn pack(x: i32, y: i32) -> u64 {
    ((x as u32 as u64) << 32) | (y as u32 as u64)
}

#[inline]
pub(crate) fn unpack(v: u64) -> (i32, i32) {
    ((v >> 32) as u32 as i32, v as u32 as i32)
}

/// Cross-thread cone. The center lives in one word so a reader never sees
/// an x from one update paired with a y from another.
#[derive(Debug)]
pub struct SharedCone {
    center: AtomicU64,
    radius: AtomicI32,
}

impl SharedCone {
    pub fn new(cone: Cone) -> Self {
        Self {
            center: AtomicU64::new(pack(cone.x, cone.y)),
            radius: AtomicI32::new(cone.radius),
        }
    }

    /// Replace the whole cone (viewport changed).
    pub fn store(&self, cone: Cone) {
        self.radius.store(cone.radius, Ordering::Relaxed);
        self.center.store(pack(cone.x, cone.y), Ordering::Relaxed);
    }

    pub fn update(&self, x: i32, y: i32) {
        self.center.store(pack(x, y), Ordering::Relaxed);
    }

    pub fn load(&self) -> Cone {
        let (x, y) = unpack(self.center.load(Ordering::Relaxed));
        Cone { x, y, radius: self.radius.load(Ordering::Relaxed) }
    }
}
