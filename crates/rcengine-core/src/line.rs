//! Grid line rasterization.
//!
//! [`Line`] yields the cells between two endpoints, both inclusive.
//! Vertical and horizontal lines walk the axis directly, in ascending
//! order. Everything else uses integer Bresenham stepping from `from`
//! towards `to`.

use crate::geom::Point;

/// Iterator over the cells of a line.
#[derive(Clone, Debug)]
pub struct Line {
    cur: Point,
    end: Point,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl Line {
    pub fn new(from: Point, to: Point) -> Self {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let reversed = (dx == 0 && from.y > to.y) || (dy == 0 && from.x > to.x);
        let (cur, end) = if reversed { (to, from) } else { (from, to) };
        Self {
            cur,
            end,
            dx,
            dy,
            sx: if cur.x < end.x { 1 } else { -1 },
            sy: if cur.y < end.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if p == self.end {
            self.done = true;
            return Some(p);
        }
        if self.dx == 0 {
            self.cur.y += 1;
        } else if self.dy == 0 {
            self.cur.x += 1;
        } else {
            let e2 = 2 * self.err;
            if e2 >= self.dy {
                self.err += self.dy;
                self.cur.x += self.sx;
            }
            if e2 <= self.dx {
                self.err += self.dx;
                self.cur.y += self.sy;
            }
        }
        Some(p)
    }
}
