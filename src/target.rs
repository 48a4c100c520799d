// Where the hidden picture sits, and the rectangle that counts as a win.

use crate::cone::{pack, unpack};
use crate::error::Error;
use crate::types::Rect;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub x: i32, // top-left draw position of the picture
    pub y: i32,
    pub rect: Rect, // exactly bounds the drawn picture
}

impl Target {
    pub fn at(x: i32, y: i32, image_width: i32, image_height: i32) -> Self {
        Self { x, y, rect: Rect::new(x, y, x + image_width, y + image_height) }
    }

    /// Win test: the point must be strictly inside the rectangle.
    pub fn hit(&self, x: i32, y: i32) -> bool {
        self.rect.contains(x, y)
    }
}

/// Pick a uniformly random spot for the picture inside the viewport.
/// An axis where the picture exactly fits gets offset 0.
pub fn place_target<R: Rng>(
    rng: &mut R,
    viewport_width: i32,
    viewport_height: i32,
    image_width: i32,
    image_height: i32,
) -> Result<Target, Error> {
    let span_x = viewport_width - image_width;
    let span_y = viewport_height - image_height;
    if span_x < 0 || span_y < 0 {
        return Err(Error::ViewportTooSmall {
            viewport: (viewport_width, viewport_height),
            image: (image_width, image_height),
        });
    }
    let x = if span_x > 0 { rng.random_range(0..span_x) } else { 0 };
    let y = if span_y > 0 { rng.random_range(0..span_y) } else { 0 };
    Ok(Target::at(x, y, image_width, image_height))
}

/// Cross-thread target. Only the offset moves; the picture size is fixed.
#[derive(Debug)]
pub struct SharedTarget {
    offset: AtomicU64,
    image_width: i32,
    image_height: i32,
}

impl SharedTarget {
    pub fn new(image_width: i32, image_height: i32) -> Self {
        Self { offset: AtomicU64::new(pack(0, 0)), image_width, image_height }
    }

    pub fn store(&self, target: Target) {
        self.offset.store(pack(target.x, target.y), Ordering::Relaxed);
    }

    pub fn load(&self) -> Target {
        let (x, y) = unpack(self.offset.load(Ordering::Relaxed));
        Target::at(x, y, self.image_width, self.image_height)
    }
}
