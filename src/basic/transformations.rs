use crate::basic::Point;

pub fn rotate_clockwise(points: &mut [Point], origin: Point, angle: f32) {
    points
        .iter_mut()
        .for_each(|point| *point = point.rotate_clockwise(origin, angle))
}

pub fn translate(points: &mut [Point], delta: Point) {
    points.iter_mut().for_each(|point| *point += delta)
}

pub fn scale_about(points: &mut [Point], origin: Point, factor: f32) {
    points
        .iter_mut()
        .for_each(|point| *point = point.scale_about(origin, factor))
}

/// Arithmetic mean, the origin for an empty slice
pub fn mean(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ZERO;
    }
    let sum = points.iter().fold(Point::ZERO, |acc, &p| acc + p);
    sum / points.len() as f32
}

/// A single affine step applied to a whole shape
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transform {
    Translate(Point),
    /// Radians, see [`Point::rotate_clockwise`]
    Rotate(f32),
    Scale(f32),
}

#[test]
fn test_mean() {
    let points = [Point::new(0., 0.), Point::new(4., 0.), Point::new(2., 6.)];
    assert_eq!(mean(&points), Point::new(2., 2.));
    assert_eq!(mean(&[]), Point::ZERO);
}
