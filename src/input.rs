// Turns polled mouse state (position + left button) into touch-style events.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up,
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    pressed: bool,
    last: Option<(i32, i32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one poll of the mouse. `pos` is None while the cursor is outside
    /// the window; a held button then produces no events until it comes back.
    pub fn poll(&mut self, pos: Option<(i32, i32)>, button_down: bool) -> Option<PointerEvent> {
        match (self.pressed, button_down, pos) {
            (false, true, Some((x, y))) => {
                self.pressed = true;
                self.last = Some((x, y));
                Some(PointerEvent::Down { x, y })
            }
            (true, true, Some((x, y))) if self.last != Some((x, y)) => {
                self.last = Some((x, y));
                Some(PointerEvent::Move { x, y })
            }
            (true, false, _) => {
                self.pressed = false;
                self.last = None;
                Some(PointerEvent::Up)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_drag_release() {
        let mut t = PointerTracker::new();
        assert_eq!(t.poll(Some((5, 5)), false), None);
        assert_eq!(t.poll(Some((5, 5)), true), Some(PointerEvent::Down { x: 5, y: 5 }));
        assert_eq!(t.poll(Some((5, 5)), true), None);
        assert_eq!(t.poll(Some((9, 6)), true), Some(PointerEvent::Move { x: 9, y: 6 }));
        assert_eq!(t.poll(Some((9, 6)), false), Some(PointerEvent::Up));
        assert_eq!(t.poll(Some((9, 6)), false), None);
    }

    #[test]
    fn press_outside_window_waits_for_cursor() {
        let mut t = PointerTracker::new();
        assert_eq!(t.poll(None, true), None);
        assert_eq!(t.poll(Some((1, 2)), true), Some(PointerEvent::Down { x: 1, y: 2 }));
        // Leaving mid-drag keeps the press alive without events.
        assert_eq!(t.poll(None, true), None);
        assert_eq!(t.poll(Some((3, 4)), true), Some(PointerEvent::Move { x: 3, y: 4 }));
    }
}
