pub use scene::{Scene, SegmentId};
pub use segments::{HexagonView, SegmentSink, Stroke, ViewStyle};

pub mod scanline;
mod scene;
pub mod segments;
