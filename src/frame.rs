// One frame of the flashlight effect.
//
// The picture is drawn on a white background, then everything outside the
// cone is painted black through an inverse clip. If the cone center sits
// inside the picture's rectangle the whole scene is shown with the win text.

use crate::canvas::Canvas;
use crate::constants::{BACKGROUND_COLOR, MASK_COLOR, PAINT_COLOR, TEXT_SIZE_DIVISOR, WIN_TEXT};
use crate::scene::Snapshot;
use crate::sprite::Sprite;
use crate::types::CirclePath;

/// Paint one frame; returns true when it showed the win screen.
/// `path` is scratch space reused across frames and is left empty.
pub fn draw_frame<C: Canvas>(
    canvas: &mut C,
    path: &mut CirclePath,
    scene: &Snapshot,
    sprite: &Sprite,
) -> bool {
    let cone = scene.cone;
    let target = scene.target;

    canvas.save();
    canvas.draw_color(BACKGROUND_COLOR);
    canvas.draw_sprite(sprite, target.x, target.y);

    path.add_circle(cone.x, cone.y, cone.radius);
    canvas.clip_out_path(path);
    canvas.draw_color(MASK_COLOR);

    let won = target.hit(cone.x, cone.y);
    if won {
        // Drop the cone clip so the whole scene shows.
        canvas.restore();
        canvas.save();
        let (w, h) = scene.viewport;
        canvas.draw_color(BACKGROUND_COLOR);
        canvas.draw_sprite(sprite, target.x, target.y);
        canvas.draw_text(WIN_TEXT, w / 3, h / 2, h / TEXT_SIZE_DIVISOR, PAINT_COLOR);
    }

    path.rewind();
    canvas.restore();
    won
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cone::Cone;
    use crate::draw::SoftCanvas;
    use crate::target::Target;
    use crate::types::FrameBuffer;

    #[derive(Debug, PartialEq)]
    enum Op {
        Save,
        Restore,
        Color(u32),
        Sprite(i32, i32),
        ClipOut(i32, i32, i32),
        Text(String, i32, i32, i32),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        fn width(&self) -> i32 { 900 }
        fn height(&self) -> i32 { 600 }
        fn save(&mut self) { self.ops.push(Op::Save) }
        fn restore(&mut self) { self.ops.push(Op::Restore) }
        fn draw_color(&mut self, color: u32) { self.ops.push(Op::Color(color)) }
        fn draw_sprite(&mut self, _sprite: &Sprite, x: i32, y: i32) { self.ops.push(Op::Sprite(x, y)) }
        fn clip_out_path(&mut self, path: &CirclePath) {
            for c in path.circles() {
                self.ops.push(Op::ClipOut(c.cx, c.cy, c.radius));
            }
        }
        fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, _color: u32) {
            self.ops.push(Op::Text(text.to_string(), x, y, size))
        }
    }

    fn snapshot(cx: i32, cy: i32) -> Snapshot {
        let mut cone = Cone::new(900, 600);
        cone.update(cx, cy);
        Snapshot { cone, target: Target::at(400, 280, 100, 80), viewport: (900, 600) }
    }

    #[test]
    fn miss_paints_background_picture_then_mask() {
        let sprite = Sprite::fallback(100, 80);
        let mut canvas = Recorder::default();
        let mut path = CirclePath::new();
        let won = draw_frame(&mut canvas, &mut path, &snapshot(100, 100), &sprite);
        assert!(!won);
        assert!(path.is_empty());
        assert_eq!(
            canvas.ops,
            vec![
                Op::Save,
                Op::Color(BACKGROUND_COLOR),
                Op::Sprite(400, 280),
                Op::ClipOut(100, 100, 100),
                Op::Color(MASK_COLOR),
                Op::Restore,
            ]
        );
    }

    #[test]
    fn hit_redraws_unclipped_and_writes_message() {
        let sprite = Sprite::fallback(100, 80);
        let mut canvas = Recorder::default();
        let mut path = CirclePath::new();
        let won = draw_frame(&mut canvas, &mut path, &snapshot(460, 310), &sprite);
        assert!(won);
        assert_eq!(
            &canvas.ops[5..],
            &[
                Op::Restore,
                Op::Save,
                Op::Color(BACKGROUND_COLOR),
                Op::Sprite(400, 280),
                Op::Text(WIN_TEXT.to_string(), 300, 300, 120),
                Op::Restore,
            ]
        );
    }

    #[test]
    fn boundary_is_not_a_win() {
        let sprite = Sprite::fallback(100, 80);
        let mut path = CirclePath::new();
        assert!(!draw_frame(&mut Recorder::default(), &mut path, &snapshot(400, 310), &sprite));
        assert!(draw_frame(&mut Recorder::default(), &mut path, &snapshot(401, 281), &sprite));
    }

    #[test]
    fn pixels_show_the_flashlight() {
        let sprite = Sprite::fallback(100, 80);
        let mut canvas = SoftCanvas::new(FrameBuffer::new(900, 600));
        let mut path = CirclePath::new();
        draw_frame(&mut canvas, &mut path, &snapshot(100, 100), &sprite);
        let fb = canvas.into_frame();
        assert_eq!(fb.pixel(100, 100), Some(BACKGROUND_COLOR)); // inside the cone
        assert_eq!(fb.pixel(100, 199), Some(BACKGROUND_COLOR));
        assert_eq!(fb.pixel(100, 200), Some(MASK_COLOR)); // on the rim
        assert_eq!(fb.pixel(450, 340), Some(MASK_COLOR)); // picture stays hidden
        assert_eq!(fb.pixel(899, 599), Some(MASK_COLOR));
    }

    #[test]
    fn cone_far_outside_masks_the_whole_frame() {
        let sprite = Sprite::fallback(100, 80);
        let mut cone = Cone::new(90, 60);
        cone.update(i32::MIN, 0);
        let scene = Snapshot { cone, target: Target::at(0, 0, 100, 80), viewport: (90, 60) };
        let mut canvas = SoftCanvas::new(FrameBuffer::new(90, 60));
        let mut path = CirclePath::new();
        assert!(!draw_frame(&mut canvas, &mut path, &scene, &sprite));
        assert!(canvas.into_frame().pixels.iter().all(|&p| p == MASK_COLOR));
    }

    #[test]
    fn win_frame_reveals_everything() {
        let sprite = Sprite::fallback(100, 80);
        let mut canvas = SoftCanvas::new(FrameBuffer::new(900, 600));
        let mut path = CirclePath::new();
        draw_frame(&mut canvas, &mut path, &snapshot(460, 310), &sprite);
        let fb = canvas.into_frame();
        assert_eq!(fb.pixel(899, 599), Some(BACKGROUND_COLOR));
        assert_eq!(fb.pixel(0, 0), Some(BACKGROUND_COLOR));
        assert_eq!(fb.pixel(450, 340), sprite.pixel(50, 60));
        assert!(fb.pixels.iter().any(|&p| p == PAINT_COLOR));
        assert!(!fb.pixels.iter().any(|&p| p == MASK_COLOR));
    }
}
