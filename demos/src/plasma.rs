//! Animated plasma background with "hello world" printed over it.

use rcengine_core::{Color, Context, Game, Point, tileset::SPACE};

/// Phase units advanced per second.
const SPEED: f64 = 120.0;
/// The phase wraps back to zero past this value.
const PERIOD: f64 = 500.0;

#[derive(Debug, Default)]
pub struct Plasma {
    t: f64,
}

impl Plasma {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current animation phase.
    pub fn phase(&self) -> f64 {
        self.t
    }

    /// Background colour of the cell at column `x`, row `y`.
    pub fn color_at(&self, x: i32, y: i32, cols: i32, rows: i32) -> Color {
        Color::rgb(
            channel(x * (rows - y), self.t, 255),
            channel(y * (cols - x), self.t, 0),
            channel(x * y, self.t, 128),
        )
    }
}

/// Triangle wave over `0..PERIOD`, shifted by `offset`.
fn channel(n: i32, t: f64, offset: i32) -> u8 {
    let n = (n as f64 + t) as i32;
    let x = (t.round() as i32 + n + offset).rem_euclid(PERIOD as i32);
    (255 - x).unsigned_abs().min(255) as u8
}

impl Game for Plasma {
    fn start(&mut self, _ctx: &mut Context<'_>) -> bool {
        self.t = 0.0;
        true
    }

    fn update(&mut self, ctx: &mut Context<'_>, delta_time: f64) -> bool {
        self.t += delta_time * SPEED;
        if self.t > PERIOD {
            self.t = 0.0;
        }

        let con = &mut *ctx.console;
        let (cols, rows) = (con.cols(), con.rows());
        for p in con.bounds() {
            let bg = self.color_at(p.x, p.y, cols, rows);
            con.draw(p, SPACE, Color::WHITE, bg);
        }
        con.print(Point::ZERO, "hello world");
        true
    }
}
