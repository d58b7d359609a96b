//! Cell coordinates ([`Point`]), cell rectangles ([`Range`]) and surface
//! rectangles ([`PixelRect`]).

use std::fmt;
use std::ops::Sub;

/// A cell coordinate: `x` is the column, `y` the row (growing down).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Per-axis offset from `rhs` to `self`.
impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Cells with `min.x <= x < max.x` and `min.y <= y < max.y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Range spanned by two corners given in any order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// `w × h` cells starting at `(x, y)`. A negative size is treated as
    /// zero.
    #[inline]
    pub fn from_size(x: i32, y: i32, w: i32, h: i32) -> Self {
        let max = Point::new(x.saturating_add(w.max(0)), y.saturating_add(h.max(0)));
        Self {
            min: Point::new(x, y),
            max,
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Overlap of two ranges; [`Range::default`] when they are disjoint.
    pub fn intersect(self, other: Range) -> Self {
        let overlap = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if overlap.is_empty() {
            Self::default()
        } else {
            overlap
        }
    }

    /// Every cell, row by row.
    #[inline]
    pub fn iter(self) -> RangeIter {
        let len = if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        };
        RangeIter {
            origin: self.min,
            width: self.width().max(1) as usize,
            next: 0,
            len,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major walk over a [`Range`], by linear index.
#[derive(Clone, Debug)]
pub struct RangeIter {
    origin: Point,
    width: usize,
    next: usize,
    len: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(Point::new(
            self.origin.x + (i % self.width) as i32,
            self.origin.y + (i / self.width) as i32,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}

/// A rectangle on the pixel surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_in_any_order() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!((r.min, r.max), (Point::ZERO, Point::new(3, 2)));
        assert_eq!((r.width(), r.height()), (3, 2));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Range::new(0, 0, 3, 2);
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn from_size_clamps_negative_sizes() {
        assert_eq!(Range::from_size(1, 2, 3, 4), Range::new(1, 2, 4, 6));
        assert!(Range::from_size(1, 1, -2, 3).is_empty());
        assert_eq!(Range::from_size(1, 1, 0, 3).iter().count(), 0);
    }

    #[test]
    fn iter_walks_rows() {
        let pts: Vec<_> = Range::from_size(5, 7, 3, 2).iter().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(5, 7),
                Point::new(6, 7),
                Point::new(7, 7),
                Point::new(5, 8),
                Point::new(6, 8),
                Point::new(7, 8),
            ]
        );
        assert_eq!(Range::new(0, 0, 4, 3).iter().len(), 12);
    }

    #[test]
    fn disjoint_intersection_is_empty() {
        let c = Range::new(0, 0, 2, 2).intersect(Range::new(5, 5, 7, 7));
        assert_eq!(c, Range::default());
        assert_eq!(c.iter().count(), 0);
    }

    #[test]
    fn intersection_clips_to_overlap() {
        let c = Range::from_size(-2, 1, 5, 10).intersect(Range::new(0, 0, 4, 4));
        assert_eq!(c, Range::new(0, 1, 3, 4));
    }

    #[test]
    fn point_offset() {
        assert_eq!(Point::new(4, 1) - Point::new(1, 3), Point::new(3, -2));
        assert_eq!(Point::new(-1, 2).to_string(), "(-1, 2)");
    }
}
