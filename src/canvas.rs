// The two seams between the frame algorithm and whatever shows the pixels.
// A `FrameSink` hands out canvases and takes them back for display; a
// `Canvas` knows the handful of draw calls a frame needs.

use crate::sprite::Sprite;
use crate::types::CirclePath;

pub trait Canvas {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Push the current clip state.
    fn save(&mut self);
    /// Pop back to the last `save`. Unbalanced calls are ignored.
    fn restore(&mut self);

    /// Fill every pixel the current clip allows.
    fn draw_color(&mut self, color: u32);
    fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32);
    /// From now on only draw *outside* the shapes in `path`.
    fn clip_out_path(&mut self, path: &CirclePath);
    /// `y` is the text baseline, `size` the glyph height in pixels.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: u32);
}

pub trait FrameSink: Send {
    type Canvas: Canvas;

    /// False while there is nothing to draw on (window hidden, not sized yet).
    fn is_valid(&self) -> bool;

    /// Exclusive canvas for one frame. May block; None if the surface went away.
    fn lock_canvas(&mut self) -> Option<Self::Canvas>;

    /// Hand the finished frame over for display.
    fn unlock_canvas_and_post(&mut self, canvas: Self::Canvas);
}
