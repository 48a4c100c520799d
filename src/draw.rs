// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows whatever frame the render thread last posted.
// 2) A software canvas that can fill, blit the picture and cut a circle out.
// 3) A tiny 5x7 bitmap font, scaled up, for the win message.

use crate::canvas::Canvas;
use crate::error::Error;
use crate::sprite::Sprite;
use crate::types::{Circle, CirclePath, FrameBuffer};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen (also pumps window events).
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// True while the window has keyboard focus.
    pub fn is_active(&mut self) -> bool {
        self.window.is_active()
    }

    /// Current drawable size in pixels.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Mouse position in window pixels, None while the cursor is outside.
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| (x as i32, y as i32))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }
}

/* ---------- Software canvas over a FrameBuffer ---------- */

/// Canvas that paints straight into a `FrameBuffer`, honoring clip-outs.
pub struct SoftCanvas {
    frame: FrameBuffer,
    clip_out: Vec<Circle>, // pixels inside any of these are protected
    saves: Vec<usize>,     // clip_out length at each save()
}

impl SoftCanvas {
    pub fn new(frame: FrameBuffer) -> Self {
        Self { frame, clip_out: Vec::new(), saves: Vec::new() }
    }

    /// Give back the painted frame.
    pub fn into_frame(self) -> FrameBuffer {
        self.frame
    }

    #[inline]
    fn visible(&self, x: i32, y: i32) -> bool {
        !self.clip_out.iter().any(|c| c.contains(x, y))
    }

    /// Put a pixel on the framebuffer if (x,y) is inside bounds and not clipped.
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (ux, uy) = (x as usize, y as usize);
        if ux >= self.frame.width || uy >= self.frame.height {
            return;
        }
        if !self.visible(x, y) {
            return;
        }
        let idx = uy * self.frame.width + ux;
        self.frame.pixels[idx] = color;
    }

    fn fill_block(&mut self, x: i32, y: i32, size: i32, color: u32) {
        for py in y..y + size {
            for px in x..x + size {
                self.put_pixel(px, py, color);
            }
        }
    }
}

impl Canvas for SoftCanvas {
    fn width(&self) -> i32 {
        self.frame.width as i32
    }

    fn height(&self) -> i32 {
        self.frame.height as i32
    }

    fn save(&mut self) {
        self.saves.push(self.clip_out.len());
    }

    fn restore(&mut self) {
        if let Some(n) = self.saves.pop() {
            self.clip_out.truncate(n);
        }
    }

    fn draw_color(&mut self, color: u32) {
        if self.clip_out.is_empty() {
            self.frame.pixels.fill(color);
            return;
        }
        let w = self.frame.width;
        for y in 0..self.frame.height {
            for x in 0..w {
                if self.visible(x as i32, y as i32) {
                    self.frame.pixels[y * w + x] = color;
                }
            }
        }
    }

    fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32) {
        for sy in 0..sprite.height() {
            for sx in 0..sprite.width() {
                if let Some(color) = sprite.pixel(sx, sy) {
                    self.put_pixel(x + sx, y + sy, color);
                }
            }
        }
    }

    fn clip_out_path(&mut self, path: &CirclePath) {
        self.clip_out.extend_from_slice(path.circles());
    }

    fn draw_text(&mut self, text: &str, mut x: i32, y: i32, size: i32, color: u32) {
        let scale = (size / GLYPH_ROWS as i32).max(1);
        let top = y - GLYPH_ROWS as i32 * scale;
        for ch in text.chars() {
            if let Some(rows) = glyph5x7(ch) {
                for (ry, rowbits) in rows.iter().enumerate() {
                    for rx in 0..5 {
                        if (rowbits & (1 << (4 - rx))) != 0 {
                            self.fill_block(x + rx * scale, top + ry as i32 * scale, scale, color);
                        }
                    }
                }
            }
            x += 6 * scale; // 5 cells glyph width + 1 cell spacing
        }
    }
}

/* ---------- 5x7 bitmap font (just what the win message needs) ---------- */

const GLYPH_ROWS: usize = 7;

/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; GLYPH_ROWS]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        _ => None,
    }
}
