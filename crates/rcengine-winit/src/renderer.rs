//! Software compositing of the console into a pixel buffer.
//!
//! The tileset is decoded once into an RGBA image. Every blit samples a
//! sprite rectangle with nearest-neighbour scaling, modulates it by the
//! tint colour and alpha, and blends it over the pixel buffer.

use std::path::Path;

use image::RgbaImage;
use rcengine_core::{Blitter, Color, EngineError, PixelRect, TilesetLayout};

/// Colour key: tileset pixels of this RGB value are fully transparent.
const COLOR_KEY: [u8; 3] = [255, 0, 255];
const BLACK_PIXEL: u32 = 0x0000_0000;

// ---------------------------------------------------------------------------
// Tileset
// ---------------------------------------------------------------------------

/// A decoded 16×16 glyph sheet.
pub struct Tileset {
    image: RgbaImage,
    layout: TilesetLayout,
}

impl Tileset {
    /// Decode the sheet at `path` and apply the colour key.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let image = image::open(path).map_err(|e| EngineError::Tileset {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_image(image.to_rgba8()))
    }

    /// Wrap an already decoded sheet, applying the colour key.
    pub fn from_image(mut image: RgbaImage) -> Self {
        for px in image.pixels_mut() {
            if px.0[..3] == COLOR_KEY {
                px.0[3] = 0;
            }
        }
        let layout = TilesetLayout::from_image_size(image.width(), image.height());
        Self { image, layout }
    }

    #[inline]
    pub fn layout(&self) -> TilesetLayout {
        self.layout
    }

    #[inline]
    fn texel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x as u32 >= self.image.width() || y as u32 >= self.image.height() {
            return None;
        }
        Some(self.image.get_pixel(x as u32, y as u32).0)
    }
}

// ---------------------------------------------------------------------------
// GridRenderer
// ---------------------------------------------------------------------------

pub(crate) struct GridRenderer {
    tileset: Tileset,
    width: usize,
    height: usize,
    /// 0x00RRGGBB pixels, `width * height`.
    pixels: Vec<u32>,
}

impl GridRenderer {
    pub fn new(tileset: Tileset, width: usize, height: usize) -> Self {
        Self {
            tileset,
            width,
            height,
            pixels: vec![BLACK_PIXEL; width * height],
        }
    }

    pub fn layout(&self) -> TilesetLayout {
        self.tileset.layout()
    }

    /// Fill the buffer with opaque black.
    pub fn clear(&mut self) {
        self.pixels.fill(BLACK_PIXEL);
    }

    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    /// Copy the internal pixel buffer into the softbuffer surface buffer.
    pub fn blit_to_buffer(&self, buf: &mut [u32], buf_width: usize, buf_height: usize) {
        let copy_w = self.width.min(buf_width);
        let copy_h = self.height.min(buf_height);

        if buf_width > self.width || buf_height > self.height {
            buf.fill(BLACK_PIXEL);
        }

        for y in 0..copy_h {
            let src_start = y * self.width;
            let dst_start = y * buf_width;
            if dst_start + copy_w <= buf.len() {
                buf[dst_start..dst_start + copy_w]
                    .copy_from_slice(&self.pixels[src_start..src_start + copy_w]);
            }
        }
    }
}

impl Blitter for GridRenderer {
    fn blit(&mut self, src: PixelRect, dest: PixelRect, tint: Color) {
        if src.w <= 0 || src.h <= 0 || dest.w <= 0 || dest.h <= 0 || tint.a == 0 {
            return;
        }
        for dy in 0..dest.h {
            let py = dest.y + dy;
            if py < 0 || py as usize >= self.height {
                continue;
            }
            let sy = src.y + dy * src.h / dest.h;
            for dx in 0..dest.w {
                let px = dest.x + dx;
                if px < 0 || px as usize >= self.width {
                    continue;
                }
                let sx = src.x + dx * src.w / dest.w;
                let Some([r, g, b, a]) = self.tileset.texel(sx, sy) else {
                    continue;
                };
                let alpha = mul8(a, tint.a);
                if alpha == 0 {
                    continue;
                }
                let idx = py as usize * self.width + px as usize;
                let under = self.pixels[idx];
                let over = Color::rgb(mul8(r, tint.r), mul8(g, tint.g), mul8(b, tint.b));
                self.pixels[idx] = blend_pixel(under, over, alpha);
            }
        }
    }
}

/// `a * b / 255`, rounded.
#[inline]
fn mul8(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32 + 127) / 255) as u8
}

/// Blend `over` with `alpha` onto a 0x00RRGGBB pixel.
#[inline]
fn blend_pixel(under: u32, over: Color, alpha: u8) -> u32 {
    let a = alpha as u32;
    let inv = 255 - a;
    let ch = |shift: u32, top: u8| -> u32 {
        let bottom = (under >> shift) & 0xFF;
        ((top as u32 * a + bottom * inv + 127) / 255) << shift
    };
    ch(16, over.r) | ch(8, over.g) | ch(0, over.b)
}
