//! Tileset geometry and the [`Blitter`] seam.
//!
//! A tileset is a single image holding a fixed `columns × rows` sheet of
//! glyph sprites. The core only needs its geometry to find the source
//! rectangle of a glyph; decoding and sampling the image is a backend
//! concern, reached through [`Blitter`].

use crate::color::Color;
use crate::geom::PixelRect;

/// Glyph whose sprite is a solid block; tinted with the back colour to
/// paint cell backgrounds.
pub const FULL_BLOCK: u8 = 219;

/// Glyph written by [`Console::clear`](crate::Console::clear).
pub const SPACE: u8 = b' ';

/// Sprite sheet geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TilesetLayout {
    /// Sprites per sheet row.
    pub columns: u32,
    /// Sprite rows in the sheet.
    pub rows: u32,
    /// Sprite width in pixels.
    pub tile_width: u32,
    /// Sprite height in pixels.
    pub tile_height: u32,
}

impl TilesetLayout {
    /// The standard 16×16 sheet covering all 256 glyphs.
    pub const SHEET_COLUMNS: u32 = 16;
    pub const SHEET_ROWS: u32 = 16;

    /// Layout of a 16×16 sheet with the given sprite size.
    pub const fn standard(tile_width: u32, tile_height: u32) -> Self {
        Self {
            columns: Self::SHEET_COLUMNS,
            rows: Self::SHEET_ROWS,
            tile_width,
            tile_height,
        }
    }

    /// Derive the layout of a 16×16 sheet from the image's pixel size.
    pub fn from_image_size(width: u32, height: u32) -> Self {
        Self::standard(width / Self::SHEET_COLUMNS, height / Self::SHEET_ROWS)
    }

    /// Source rectangle of `glyph` in the sheet.
    pub fn source_rect(&self, glyph: u8) -> PixelRect {
        let columns = self.columns.max(1);
        let g = glyph as u32;
        PixelRect::new(
            ((g % columns) * self.tile_width) as i32,
            ((g / columns) * self.tile_height) as i32,
            self.tile_width as i32,
            self.tile_height as i32,
        )
    }
}

impl Default for TilesetLayout {
    fn default() -> Self {
        Self::standard(8, 8)
    }
}

/// A texture provider that can copy a tinted sub-rectangle of the tileset
/// onto the presentation surface.
///
/// `tint` modulates the sprite: its RGB multiplies the sprite colour and
/// its alpha multiplies the sprite alpha before blending onto the target.
pub trait Blitter {
    fn blit(&mut self, src: PixelRect, dest: PixelRect, tint: Color);
}
