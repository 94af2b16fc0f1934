use std::iter::FusedIterator;

use static_assertions::const_assert;

use crate::basic::Point;
use crate::rendering::scanline::{self, Spans};
use crate::shape::{Vertices, VERTEX_COUNT};

// a fan needs at least one triangle
const_assert!(VERTEX_COUNT >= 3);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl From<Triangle> for lyon_geom::Triangle<f32> {
    fn from(Triangle { a, b, c }: Triangle) -> Self {
        lyon_geom::Triangle { a: a.into(), b: b.into(), c: c.into() }
    }
}

impl Triangle {
    /// Positive when a, b, c turn clockwise on a y-down screen
    pub fn signed_area(self) -> f32 {
        (self.b - self.a).cross(self.c - self.a) / 2.
    }

    /// Strictly inside, points on an edge are not contained
    pub fn contains(self, point: Point) -> bool {
        lyon_geom::Triangle::from(self).contains_point(point.into())
    }

    pub fn spans(self) -> Spans {
        scanline::rasterize(self.a, self.b, self.c)
    }
}

/// Fan triangulation around vertex 0: `(v0, v1, v2), (v0, v2, v3), ...`
///
/// Borrows the vertices, so a new fan has to be requested after every
/// mutation and always reflects the current shape.
#[derive(Clone, Debug)]
pub struct Fan<'a> {
    vertices: &'a Vertices,
    next: usize,
}

impl<'a> Fan<'a> {
    pub fn new(vertices: &'a Vertices) -> Self {
        Self { vertices, next: 1 }
    }
}

impl Iterator for Fan<'_> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next + 1 >= VERTEX_COUNT {
            return None;
        }
        let triangle = Triangle {
            a: self.vertices[0],
            b: self.vertices[self.next],
            c: self.vertices[self.next + 1],
        };
        self.next += 1;
        Some(triangle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (VERTEX_COUNT - 1).saturating_sub(self.next);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Fan<'_> {}

impl FusedIterator for Fan<'_> {}
