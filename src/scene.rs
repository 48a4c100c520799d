// Everything the render thread needs to draw a frame, shared with the input side.

use crate::cone::{Cone, SharedCone, pack, unpack};
use crate::sprite::Sprite;
use crate::target::{SharedTarget, Target};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// One frame's worth of state, read out of the atomics in one go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub cone: Cone,
    pub target: Target,
    pub viewport: (i32, i32),
}

#[derive(Debug)]
pub struct Scene {
    cone: SharedCone,
    target: SharedTarget,
    viewport: AtomicU64,
    sprite: Arc<Sprite>,
}

impl Scene {
    /// Empty viewport until the host reports a size.
    pub fn new(sprite: Arc<Sprite>) -> Self {
        Self {
            cone: SharedCone::new(Cone::new(0, 0)),
            target: SharedTarget::new(sprite.width(), sprite.height()),
            viewport: AtomicU64::new(pack(0, 0)),
            sprite,
        }
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn cone(&self) -> &SharedCone {
        &self.cone
    }

    pub fn target(&self) -> &SharedTarget {
        &self.target
    }

    pub fn set_viewport(&self, width: i32, height: i32) {
        self.viewport.store(pack(width, height), Ordering::Relaxed);
    }

    pub fn viewport(&self) -> (i32, i32) {
        unpack(self.viewport.load(Ordering::Relaxed))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cone: self.cone.load(),
            target: self.target.load(),
            viewport: self.viewport(),
        }
    }
}
