//! Scanline fill of a single triangle.
//!
//! Every integer row from just above the lowest vertex up to the highest
//! vertex gets one horizontal [`Span`]. Row bounds come from truncating the
//! vertex y-coordinates (`as i32`), the x-coordinates stay fractional.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use crate::basic::Point;

/// The part of a triangle's interior on row `y`.
///
/// `x_long` lies on the edge that bends at the middle vertex and `x_short`
/// on the edge from the lowest to the highest vertex, so either one can be
/// the leftmost.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Span {
    pub y: i32,
    pub x_long: f32,
    pub x_short: f32,
}

impl Span {
    pub fn left(self) -> f32 {
        self.x_long.min(self.x_short)
    }

    pub fn right(self) -> f32 {
        self.x_long.max(self.x_short)
    }

    pub fn width(self) -> f32 {
        self.right() - self.left()
    }

    /// Left to right, ready to be drawn as a line segment
    pub fn endpoints(self) -> (Point, Point) {
        let y = self.y as f32;
        (Point::new(self.left(), y), Point::new(self.right(), y))
    }
}

/// x on the line through `from` and `to` at height `y`
fn x_at(from: Point, to: Point, y: f32) -> f32 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0. || dy == 0. {
        from.x
    } else {
        from.x + (y - from.y) * dx / dy
    }
}

/// Rows of a triangle, lowest first, see [`rasterize`]
#[derive(Clone, Debug)]
pub struct Spans {
    low: Point,
    mid: Point,
    high: Point,
    rows: RangeInclusive<i32>,
}

/// Splits the triangle into one span per row in `trunc(low.y) + 1 ..= trunc(high.y)`.
///
/// Vertices with equal y keep their relative order. Degenerate triangles
/// don't need special handling, collinear or coincident vertices just give
/// empty or zero-width spans.
pub fn rasterize(p1: Point, p2: Point, p3: Point) -> Spans {
    let [low, mid, high] = sort_by_y([p1, p2, p3]);

    Spans {
        low,
        mid,
        high,
        rows: (low.y as i32).saturating_add(1)..=high.y as i32,
    }
}

/// Bubble sort network, the strict comparisons keep it stable
fn sort_by_y(mut points: [Point; 3]) -> [Point; 3] {
    for (i, j) in [(0, 1), (1, 2), (0, 1)] {
        if points[i].y > points[j].y {
            points.swap(i, j);
        }
    }
    points
}

impl Spans {
    /// Drops every row outside `rows`
    pub fn clip_rows(mut self, rows: RangeInclusive<i32>) -> Self {
        if !self.rows.is_empty() {
            let start = *self.rows.start().max(rows.start());
            let end = *self.rows.end().min(rows.end());
            self.rows = start..=end;
        }
        self
    }

    fn span_at(&self, y: i32) -> Span {
        let Self { low, mid, high, .. } = *self;
        let row = y as f32;

        // the bend is taken right away when low -> mid is horizontal
        let x_long = if low.y != mid.y && row < mid.y {
            x_at(low, mid, row)
        } else {
            x_at(mid, high, row)
        };
        let x_short = x_at(low, high, row);

        Span { y, x_long, x_short }
    }
}

impl Iterator for Spans {
    type Item = Span;

    fn next(&mut self) -> Option<Self::Item> {
        let y = self.rows.next()?;
        Some(self.span_at(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Spans {}

impl FusedIterator for Spans {}
