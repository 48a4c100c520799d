// Core types shared by the tracker, the placement code and the renderer.

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Color at (x,y), or None when outside the frame.
    #[cfg(test)]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// Axis-aligned rectangle in viewport pixels; `right`/`bottom` are exclusive edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    #[cfg(test)]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[cfg(test)]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Strict containment: a point on any edge is outside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x > self.left && x < self.right && y > self.top && y < self.bottom
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Circle {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

impl Circle {
    /// True when pixel (x,y) lies strictly inside the circle.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let dx = x as i64 - self.cx as i64;
        let dy = y as i64 - self.cy as i64;
        let r = self.radius as i64;
        // Saturate: a center at the far end of the i32 range still works.
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)) < r * r
    }
}

/// Reusable clip shape. Built once per frame, rewound afterwards so the
/// allocation survives across frames.
#[derive(Clone, Debug, Default)]
pub struct CirclePath {
    circles: Vec<Circle>,
}

impl CirclePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_circle(&mut self, cx: i32, cy: i32, radius: i32) {
        self.circles.push(Circle { cx, cy, radius });
    }

    /// Drop all circles but keep the storage.
    pub fn rewind(&mut self) {
        self.circles.clear();
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_strict() {
        let r = Rect::new(10, 20, 110, 100);
        assert!(!r.contains(10, 50));
        assert!(!r.contains(110, 50));
        assert!(!r.contains(50, 20));
        assert!(!r.contains(50, 100));
        assert!(r.contains(11, 21));
        assert!(r.contains(109, 99));
        assert_eq!((r.width(), r.height()), (100, 80));
    }

    #[test]
    fn circle_excludes_its_rim() {
        let c = Circle { cx: 0, cy: 0, radius: 5 };
        assert!(c.contains(0, 0));
        assert!(c.contains(4, 0));
        assert!(c.contains(3, 3));
        assert!(!c.contains(5, 0));
        assert!(!c.contains(4, 4));
    }

    #[test]
    fn far_away_center_does_not_overflow() {
        let c = Circle { cx: i32::MIN, cy: 0, radius: 100 };
        assert!(!c.contains(i32::MAX, 0));
        assert!(c.contains(i32::MIN + 99, 0));
    }

    #[test]
    fn rewind_empties_path() {
        let mut path = CirclePath::new();
        path.add_circle(1, 2, 3);
        assert_eq!(path.circles(), &[Circle { cx: 1, cy: 2, radius: 3 }]);
        path.rewind();
        assert!(path.is_empty());
    }

    #[test]
    fn pixel_lookup_is_bounds_checked() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.pixels[2 * 4 + 3] = 0x00_12_34_56;
        assert_eq!(fb.pixel(3, 2), Some(0x00_12_34_56));
        assert_eq!(fb.pixel(4, 2), None);
        assert_eq!(fb.pixel(-1, 0), None);
    }
}
