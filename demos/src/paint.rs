//! Mouse-driven line drawing.
//!
//! Left drag draws a line, right click stamps a block, `Tab` cycles the
//! palette, `C` clears the canvas and `Esc` quits.

use rcengine_core::{
    Color, Context, Game, KeyCode, Point, PointerButton, Range, diag, tileset::FULL_BLOCK,
};

const PALETTE: [Color; 4] = [
    Color::rgb(230, 80, 60),
    Color::rgb(90, 200, 90),
    Color::rgb(80, 140, 240),
    Color::rgb(240, 220, 90),
];

const STROKE_GLYPH: u8 = b'#';
const PREVIEW_GLYPH: u8 = b'+';
const GRID_COLOR: Color = Color::rgb(40, 40, 40);
const CURSOR_TINT: Color = Color::rgba(255, 255, 255, 96);
const STATUS_BG: Color = Color::rgba(0, 0, 128, 200);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stroke {
    pub from: Point,
    pub to: Point,
    pub color: Color,
}

#[derive(Debug, Default)]
pub struct Paint {
    strokes: Vec<Stroke>,
    stamps: Vec<(Point, Color)>,
    anchor: Option<Point>,
    palette_index: usize,
}

impl Paint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn stamps(&self) -> &[(Point, Color)] {
        &self.stamps
    }

    pub fn brush(&self) -> Color {
        PALETTE[self.palette_index]
    }

    fn handle_input(&mut self, ctx: &Context<'_>) {
        if ctx.key(KeyCode::TAB).pressed {
            self.palette_index = (self.palette_index + 1) % PALETTE.len();
        }
        if KeyCode::from_char('c').is_some_and(|k| ctx.key(k).pressed) {
            diag::message("canvas cleared", 1);
            self.strokes.clear();
            self.stamps.clear();
        }

        let p = ctx.pointer();
        let left = ctx.button(PointerButton::Left);
        if left.pressed {
            self.anchor = Some(p);
        }
        if left.released {
            if let Some(from) = self.anchor.take() {
                diag::message(&format!("stroke {from} -> {p}"), 1);
                self.strokes.push(Stroke {
                    from,
                    to: p,
                    color: self.brush(),
                });
            }
        }
        if ctx.button(PointerButton::Right).pressed {
            self.stamps.push((p, self.brush()));
        }
    }
}

impl Game for Paint {
    fn start(&mut self, ctx: &mut Context<'_>) -> bool {
        diag::rule(0);
        diag::message(&format!("paint on {}x{}", ctx.console.cols(), ctx.console.rows()), 0);
        true
    }

    fn update(&mut self, ctx: &mut Context<'_>, _delta_time: f64) -> bool {
        if ctx.key(KeyCode::ESCAPE).pressed {
            return false;
        }
        self.handle_input(ctx);

        let pointer = ctx.pointer();
        let left_held = ctx.button(PointerButton::Left).hold;
        let con = &mut *ctx.console;
        let bounds = con.bounds();

        con.fill(bounds, b'.', GRID_COLOR, Color::BLACK);
        for &(p, color) in &self.stamps {
            con.fill(Range::from_size(p.x - 1, p.y - 1, 3, 3), FULL_BLOCK, color, Color::BLACK);
        }
        for s in &self.strokes {
            con.draw_line(s.from, s.to, STROKE_GLYPH, s.color, Color::BLACK);
        }
        if let (Some(from), true) = (self.anchor, left_held) {
            con.draw_line(from, pointer, PREVIEW_GLYPH, self.brush().with_alpha(160), Color::TRANSPARENT);
        }

        let glyph = con.glyph(pointer);
        con.draw(pointer, glyph, Color::TRANSPARENT, CURSOR_TINT);

        let status = format!("{} strokes  TAB colour  C clear  ESC quit", self.strokes.len());
        con.write(Point::new(0, bounds.height() - 1), &status, Color::WHITE, STATUS_BG);
        true
    }

    fn destroy(&mut self) -> bool {
        log::info!("{} strokes, {} stamps", self.strokes.len(), self.stamps.len());
        true
    }
}
