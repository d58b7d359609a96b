//! The [`Console`]: a fixed grid of [`Cell`]s with compositing draw
//! operations.
//!
//! Cells live in one row-major `Vec` owned by the console and are addressed
//! by `Point { x: column, y: row }`. Every operation tolerates coordinates
//! outside the grid: writes are clipped or dropped and reads return a
//! neutral value, so callers never have to bounds-check before drawing.

use crate::cell::Cell;
use crate::color::Color;
use crate::geom::{PixelRect, Point, Range};
use crate::line::Line;
use crate::tileset::{Blitter, FULL_BLOCK, SPACE, TilesetLayout};

/// Glyph used by [`Console::write`] for characters above Latin-1.
const UNMAPPED: u8 = b'?';

/// A `cols × rows` grid of cells.
#[derive(Clone, Debug)]
pub struct Console {
    cells: Vec<Cell>,
    cols: i32,
    rows: i32,
    cell_width: i32,
    cell_height: i32,
    layout: TilesetLayout,
}

impl Console {
    /// Create a grid of `cols × rows` cells, each `cell_width × cell_height`
    /// pixels on the surface. Destination rectangles are fixed here.
    pub fn new(cols: i32, rows: i32, cell_width: i32, cell_height: i32) -> Self {
        let cols = cols.max(0);
        let rows = rows.max(0);
        let cells = Range::new(0, 0, cols, rows)
            .iter()
            .map(|p| {
                Cell::new(PixelRect::new(
                    p.x.saturating_mul(cell_width),
                    p.y.saturating_mul(cell_height),
                    cell_width,
                    cell_height,
                ))
            })
            .collect();
        Self {
            cells,
            cols,
            rows,
            cell_width,
            cell_height,
            layout: TilesetLayout::default(),
        }
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Cell size in pixels (width, height).
    #[inline]
    pub fn cell_size(&self) -> (i32, i32) {
        (self.cell_width, self.cell_height)
    }

    /// The grid as a range of cells.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.cols, self.rows)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// The tileset layout used to pick glyph sprites when rendering.
    #[inline]
    pub fn layout(&self) -> &TilesetLayout {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: TilesetLayout) {
        self.layout = layout;
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| (p.y as usize) * (self.cols as usize) + (p.x as usize))
    }

    /// The cell at `p`, if inside the grid.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Set the glyph at `p` and composite `fg`/`bg` over the cell's current
    /// colours. No-op outside the grid.
    pub fn draw(&mut self, p: Point, glyph: u8, fg: Color, bg: Color) {
        if let Some(cell) = self.cell_mut(p) {
            cell.paint(glyph, fg, bg);
        }
    }

    /// Write `text` left to right starting at `p`, one column per
    /// character, stopping at the right edge. Spaces are skipped so the
    /// cells beneath show through. No-op when `p` is outside the grid.
    pub fn write(&mut self, p: Point, text: &str, fg: Color, bg: Color) {
        if !self.contains(p) {
            return;
        }
        for (x, ch) in (p.x..self.cols).zip(text.chars()) {
            let glyph = u8::try_from(ch).unwrap_or(UNMAPPED);
            if glyph == SPACE {
                continue;
            }
            self.draw(Point::new(x, p.y), glyph, fg, bg);
        }
    }

    /// [`write`](Console::write) with transparent colours: glyphs only.
    pub fn print(&mut self, p: Point, text: &str) {
        self.write(p, text, Color::TRANSPARENT, Color::TRANSPARENT);
    }

    /// [`draw`](Console::draw) every cell of `range`, clipped to the grid.
    pub fn fill(&mut self, range: Range, glyph: u8, fg: Color, bg: Color) {
        for p in range.intersect(self.bounds()) {
            self.draw(p, glyph, fg, bg);
        }
    }

    /// [`draw`](Console::draw) every cell of the line from `from` to `to`.
    /// No-op if either endpoint is outside the grid.
    pub fn draw_line(&mut self, from: Point, to: Point, glyph: u8, fg: Color, bg: Color) {
        if !self.contains(from) || !self.contains(to) {
            return;
        }
        for p in Line::new(from, to) {
            self.draw(p, glyph, fg, bg);
        }
    }

    /// Reset every cell to a space, white on black.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.reset(SPACE, Color::WHITE, Color::BLACK);
        }
    }

    // -----------------------------------------------------------------------
    // Reading
    // -----------------------------------------------------------------------

    /// Glyph at `p`, or 0 outside the grid.
    pub fn glyph(&self, p: Point) -> u8 {
        self.cell(p).map_or(0, Cell::glyph)
    }

    /// Foreground at `p`, or [`Color::TRANSPARENT`] outside the grid.
    pub fn fore_color(&self, p: Point) -> Color {
        self.cell(p).map_or(Color::TRANSPARENT, |c| c.fg)
    }

    /// Background at `p`, or [`Color::TRANSPARENT`] outside the grid.
    pub fn back_color(&self, p: Point) -> Color {
        self.cell(p).map_or(Color::TRANSPARENT, |c| c.bg)
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter())
    }

    // -----------------------------------------------------------------------
    // Compositing
    // -----------------------------------------------------------------------

    /// Composite the whole grid onto `target`: for every cell the solid
    /// block sprite tinted with the back colour, then the glyph sprite
    /// tinted with the fore colour.
    pub fn render<B: Blitter + ?Sized>(&self, target: &mut B) {
        let back = self.layout.source_rect(FULL_BLOCK);
        for cell in &self.cells {
            let dest = cell.dest_rect();
            target.blit(back, dest, cell.bg);
            target.blit(cell.source_rect(&self.layout), dest, cell.fg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn snapshot(con: &Console) -> Vec<Cell> {
        con.iter().map(|(_, c)| *c).collect()
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut con = Console::new(3, 3, 20, 20);
        con.draw(Point::new(1, 1), b'@', RED, BLUE);
        con.clear();
        for (_, cell) in con.iter() {
            assert_eq!(cell.glyph(), SPACE);
            assert_eq!(cell.fg, Color::WHITE);
            assert_eq!(cell.bg, Color::BLACK);
        }
    }

    #[test]
    fn dest_rects_follow_grid_position() {
        let con = Console::new(4, 3, 10, 12);
        let cell = con.cell(Point::new(3, 2)).unwrap();
        assert_eq!(cell.dest_rect(), PixelRect::new(30, 24, 10, 12));
    }

    #[test]
    fn huge_cells_saturate_instead_of_overflowing() {
        let con = Console::new(2, 1, i32::MAX, 1);
        let cell = con.cell(Point::new(1, 0)).unwrap();
        assert_eq!(cell.dest_rect().x, i32::MAX);
    }

    #[test]
    fn opaque_draw_overwrites() {
        let mut con = Console::new(5, 4, 8, 8);
        let p = Point::new(4, 3);
        con.draw(p, b'x', RED, BLUE);
        assert_eq!(con.glyph(p), b'x');
        assert_eq!(con.fore_color(p), RED);
        assert_eq!(con.back_color(p), BLUE);
        con.draw(p, b'y', BLUE, RED);
        assert_eq!(con.fore_color(p), BLUE);
        assert_eq!(con.back_color(p), RED);
    }

    #[test]
    fn translucent_draw_layers_over_existing() {
        let mut con = Console::new(2, 2, 8, 8);
        con.clear();
        let p = Point::new(0, 0);
        con.draw(p, b'.', Color::TRANSPARENT, Color::rgba(255, 255, 255, 128));
        assert_eq!(con.back_color(p), Color::rgb(128, 128, 128));
        assert_eq!(con.fore_color(p), Color::WHITE);
        con.draw(p, b'.', Color::rgba(255, 0, 0, 128), BLUE);
        assert_eq!(con.fore_color(p), Color::rgb(255, 127, 127));
        assert_eq!(con.back_color(p), BLUE);
    }

    #[test]
    fn layered_translucent_colors_accumulate() {
        let mut a = Console::new(1, 1, 8, 8);
        let mut b = Console::new(1, 1, 8, 8);
        let p = Point::ZERO;
        a.draw(p, b'a', RED.with_alpha(128), Color::TRANSPARENT);
        a.draw(p, b'a', BLUE.with_alpha(128), Color::TRANSPARENT);
        b.draw(p, b'a', BLUE.with_alpha(128), Color::TRANSPARENT);
        assert_ne!(a.fore_color(p), b.fore_color(p));
    }

    #[test]
    fn out_of_range_is_silent() {
        let mut con = Console::new(3, 2, 8, 8);
        con.clear();
        let before = snapshot(&con);
        con.draw(Point::new(-1, 0), b'x', RED, RED);
        con.draw(Point::new(3, 0), b'x', RED, RED);
        con.write(Point::new(0, 2), "xyz", RED, RED);
        con.draw_line(Point::new(0, 0), Point::new(5, 0), b'x', RED, RED);
        con.fill(Range::new(10, 10, 20, 20), b'x', RED, RED);
        assert_eq!(snapshot(&con), before);
        assert_eq!(con.glyph(Point::new(9, 9)), 0);
        assert_eq!(con.fore_color(Point::new(-1, -1)), Color::TRANSPARENT);
        assert_eq!(con.back_color(Point::new(0, 7)), Color::TRANSPARENT);
    }

    #[test]
    fn write_skips_spaces_and_stops_at_edge() {
        let mut con = Console::new(4, 1, 8, 8);
        con.clear();
        con.draw(Point::new(1, 0), b'#', RED, BLUE);
        con.write(Point::ZERO, "a bcd", Color::WHITE, Color::TRANSPARENT);
        assert_eq!(con.glyph(Point::new(0, 0)), b'a');
        assert_eq!(con.glyph(Point::new(1, 0)), b'#');
        assert_eq!(con.fore_color(Point::new(1, 0)), RED);
        assert_eq!(con.back_color(Point::new(1, 0)), BLUE);
        assert_eq!(con.glyph(Point::new(2, 0)), b'b');
        assert_eq!(con.glyph(Point::new(3, 0)), b'c');
        assert_eq!(con.back_color(Point::new(3, 0)), Color::BLACK);
    }

    #[test]
    fn write_maps_wide_chars_to_placeholder() {
        let mut con = Console::new(3, 1, 8, 8);
        con.print(Point::ZERO, "é→");
        assert_eq!(con.glyph(Point::new(0, 0)), 0xE9);
        assert_eq!(con.glyph(Point::new(1, 0)), UNMAPPED);
    }

    #[test]
    fn fill_clips_to_bounds() {
        let mut con = Console::new(4, 3, 8, 8);
        con.clear();
        con.fill(Range::new(2, 1, 10, 10), b'=', RED, BLUE);
        for (p, cell) in con.iter() {
            let inside = p.x >= 2 && p.y >= 1;
            assert_eq!(cell.glyph() == b'=', inside, "at {p}");
        }
    }

    #[test]
    fn fill_with_negative_origin() {
        let mut con = Console::new(3, 3, 8, 8);
        con.clear();
        con.fill(Range::from_size(-2, -2, 3, 3), b'+', RED, BLUE);
        let hits: Vec<_> = con.iter().filter(|(_, c)| c.glyph() == b'+').map(|(p, _)| p).collect();
        assert_eq!(hits, vec![Point::new(0, 0)]);
    }

    #[test]
    fn line_cells() {
        let mut con = Console::new(6, 6, 8, 8);
        con.clear();
        con.draw_line(Point::new(2, 2), Point::new(2, 2), b'*', RED, BLUE);
        let marked = |con: &Console| -> Vec<Point> {
            con.iter().filter(|(_, c)| c.glyph() == b'*').map(|(p, _)| p).collect()
        };
        assert_eq!(marked(&con), vec![Point::new(2, 2)]);

        con.clear();
        con.draw_line(Point::new(0, 0), Point::new(4, 0), b'*', RED, BLUE);
        assert_eq!(marked(&con), (0..5).map(|x| Point::new(x, 0)).collect::<Vec<_>>());

        con.clear();
        con.draw_line(Point::new(0, 0), Point::new(3, 3), b'*', RED, BLUE);
        assert_eq!(marked(&con), (0..4).map(|i| Point::new(i, i)).collect::<Vec<_>>());
    }

    #[derive(Default)]
    struct Recorder(Vec<(PixelRect, PixelRect, Color)>);

    impl Blitter for Recorder {
        fn blit(&mut self, src: PixelRect, dest: PixelRect, tint: Color) {
            self.0.push((src, dest, tint));
        }
    }

    #[test]
    fn render_blits_back_then_glyph() {
        let mut con = Console::new(2, 1, 10, 10);
        con.set_layout(TilesetLayout::standard(8, 8));
        con.clear();
        con.draw(Point::new(1, 0), b'A', RED, BLUE);
        let mut rec = Recorder::default();
        con.render(&mut rec);
        assert_eq!(rec.0.len(), 4);
        let block = TilesetLayout::standard(8, 8).source_rect(FULL_BLOCK);
        assert_eq!(rec.0[0], (block, PixelRect::new(0, 0, 10, 10), Color::BLACK));
        assert_eq!(rec.0[1].2, Color::WHITE);
        assert_eq!(rec.0[2], (block, PixelRect::new(10, 0, 10, 10), BLUE));
        assert_eq!(rec.0[3], (PixelRect::new(8, 32, 8, 8), PixelRect::new(10, 0, 10, 10), RED));
    }
}
