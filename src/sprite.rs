// The hidden picture. Decoded once, immutable afterwards, shared with the
// render thread behind an Arc.

use crate::error::Error;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Pixels below this alpha are treated as holes and never drawn.
const ALPHA_CUTOFF: u8 = 128;

#[derive(Clone, Debug)]
pub struct Sprite {
    width: i32,
    height: i32,
    pixels: Vec<u32>,  // 0x00RRGGBB, row-major
    opaque: Vec<bool>, // same layout; false = let the background show through
}

impl Sprite {
    /// Pack an RGBA image into the 0x00RRGGBB layout the frame buffer uses.
    pub fn from_rgba(img: &RgbaImage) -> Self {
        let (w, h) = img.dimensions();
        let mut pixels = Vec::with_capacity((w as usize) * (h as usize));
        let mut opaque = Vec::with_capacity(pixels.capacity());
        for (_x, _y, pixel) in img.enumerate_pixels() {
            let r = pixel[0] as u32;
            let g = pixel[1] as u32;
            let b = pixel[2] as u32;
            pixels.push((r << 16) | (g << 8) | b);
            opaque.push(pixel[3] >= ALPHA_CUTOFF);
        }
        Self { width: w as i32, height: h as i32, pixels, opaque }
    }

    /// Decode a picture from disk (any format the `image` crate knows).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| Error::AssetLoad(format!("{}: {e}", path.display())))?;
        Ok(Self::from_rgba(&img.to_rgba8()))
    }

    /// Built-in picture used when no asset file is around: a little green robot.
    pub fn fallback(width: u32, height: u32) -> Self {
        let green = Rgba([0x3D, 0xDC, 0x84, 0xFF]);
        let white = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
        let clear = Rgba([0, 0, 0, 0]);
        let mut img = RgbaImage::from_pixel(width, height, clear);

        let (w, h) = (width as f32, height as f32);
        let cx = w / 2.0;
        let head_r = w * 0.3;
        let head_cy = h * 0.45;
        let body_top = h * 0.5;
        let body_bottom = h * 0.95;
        let eye_r = head_r * 0.15;

        for (x, y, px) in img.enumerate_pixels_mut() {
            let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
            let dx = fx - cx;
            let dy = fy - head_cy;
            let in_head = fy <= head_cy && dx * dx + dy * dy <= head_r * head_r;
            let in_body = fy >= body_top && fy <= body_bottom && dx.abs() <= head_r;
            if in_head || in_body {
                *px = green;
            }
            // Eyes sit on the upper part of the head.
            for side in [-1.0f32, 1.0] {
                let ex = fx - (cx + side * head_r * 0.45);
                let ey = fy - (head_cy - head_r * 0.5);
                if ex * ex + ey * ey <= eye_r * eye_r {
                    *px = white;
                }
            }
        }
        Self::from_rgba(&img)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Color at (x,y) inside the sprite, None for transparent or out-of-range pixels.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        if self.opaque[idx] { Some(self.pixels[idx]) } else { None }
    }
}
