use ggez::mint::Point2;
use lyon_geom::euclid::default::Point2D;
use serde::Deserialize;
use std::ops::{Div, Mul};

/// A more convenient version of mint::Point2<f32>, also used as a 2D vector
#[derive(Copy, Clone, Debug, Default, PartialEq, Add, AddAssign, Sub, SubAssign, Deserialize)]
#[serde(from = "[f32; 2]")]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x, y }
    }
}

impl From<Point> for Point2D<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2D::new(x, y)
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Div<f32> for Point {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl Point {
    pub const ZERO: Self = Self::new(0., 0.);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Applies the standard rotation matrix to the offset from `origin`,
    /// with y pointing down this turns clockwise on screen
    #[must_use]
    pub fn rotate_clockwise(mut self, origin: Self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        self -= origin;
        self = Point {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        };
        self + origin
    }

    #[must_use]
    pub fn rotate_counterclockwise(self, origin: Self, angle: f32) -> Self {
        self.rotate_clockwise(origin, -angle)
    }

    /// Multiplies the offset from `origin` by `factor`
    #[must_use]
    pub fn scale_about(self, origin: Self, factor: f32) -> Self {
        (self - origin) * factor + origin
    }

    #[must_use]
    pub fn magnitude(self) -> f32 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f32 {
        (other - self).magnitude()
    }

    /// z component of the 3D cross product
    #[must_use]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }
}

#[cfg(test)]
pub(crate) fn assert_close(a: Point, b: Point) {
    const EPSILON: f32 = 1e-3;
    assert!(
        a.distance_to(b) < EPSILON,
        "points differ: {a:?} vs {b:?}",
    );
}

#[test]
fn test_quarter_turn() {
    let origin = Point::new(1., 1.);
    let p = Point::new(3., 1.);
    // y points down, a positive quarter turn ends up below the origin
    assert_close(p.rotate_clockwise(origin, std::f32::consts::FRAC_PI_2), Point::new(1., 3.));
    assert_close(p.rotate_counterclockwise(origin, std::f32::consts::FRAC_PI_2), Point::new(1., -1.));
}

#[test]
fn test_scale_about() {
    let origin = Point::new(10., 10.);
    assert_close(Point::new(20., 10.).scale_about(origin, 0.5), Point::new(15., 10.));
    assert_close(Point::new(20., 10.).scale_about(origin, -1.), Point::new(0., 10.));
}
