pub use point::Point;
pub use transformations::Transform;

mod point;
pub mod transformations;

#[cfg(test)]
pub(crate) use point::assert_close;
