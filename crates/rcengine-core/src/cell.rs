//! The [`Cell`] type: one grid position's glyph and colours.

use crate::color::Color;
use crate::geom::PixelRect;
use crate::tileset::TilesetLayout;

/// A single console cell.
///
/// The destination rectangle is fixed when the console creates the cell
/// and has no setter. The source rectangle is never stored; it follows from
/// the glyph and the tileset layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    glyph: u8,
    dest: PixelRect,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    /// A cell covering `dest`, with glyph 0 and white-on-black colours.
    pub(crate) const fn new(dest: PixelRect) -> Self {
        Self {
            glyph: 0,
            dest,
            fg: Color::WHITE,
            bg: Color::BLACK,
        }
    }

    #[inline]
    pub const fn glyph(&self) -> u8 {
        self.glyph
    }

    #[inline]
    pub fn set_glyph(&mut self, glyph: u8) {
        self.glyph = glyph;
    }

    /// Where the cell lands on the pixel surface.
    #[inline]
    pub const fn dest_rect(&self) -> PixelRect {
        self.dest
    }

    /// The glyph's sprite in `layout`.
    #[inline]
    pub fn source_rect(&self, layout: &TilesetLayout) -> PixelRect {
        layout.source_rect(self.glyph)
    }

    /// Set the glyph and composite both colours over the current ones.
    #[inline]
    pub fn paint(&mut self, glyph: u8, fg: Color, bg: Color) {
        self.glyph = glyph;
        self.fg = self.fg.blend(fg);
        self.bg = self.bg.blend(bg);
    }

    /// Overwrite glyph and colours without blending.
    #[inline]
    pub(crate) fn reset(&mut self, glyph: u8, fg: Color, bg: Color) {
        self.glyph = glyph;
        self.fg = fg;
        self.bg = bg;
    }
}
