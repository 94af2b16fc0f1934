use ggez::graphics::Color;
use log::trace;
use std::ops::RangeInclusive;

use crate::basic::{Point, Transform};
use crate::shape::Hexagon;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub thickness: f32,
}

/// Something that keeps line segments on screen until they are removed.
///
/// Handles are deliberately not `Clone`, so every segment can be
/// removed at most once.
pub trait SegmentSink {
    type Handle;

    fn draw_segment(&mut self, from: Point, to: Point, stroke: Stroke) -> Self::Handle;
    fn remove_segment(&mut self, handle: Self::Handle);
}

#[derive(Copy, Clone, Debug)]
pub struct ViewStyle {
    pub outline: Stroke,
    pub fill: Stroke,
    pub draw_fill: bool,
    /// Fill rows below 0 or past the bottom of the scene are never drawn
    pub scene_size: Point,
}

impl ViewStyle {
    fn visible_rows(&self) -> RangeInclusive<i32> {
        0..=self.scene_size.y as i32
    }
}

/// A hexagon together with the segments currently drawn for it.
///
/// Every change to the hexagon goes through the view, which removes all
/// of its segments and draws them again from the new vertices. Dropping
/// the view removes whatever it still has on screen.
pub struct HexagonView<S: SegmentSink> {
    sink: S,
    hexagon: Hexagon,
    style: ViewStyle,

    outline: Vec<S::Handle>,
    fill: Vec<S::Handle>,
}

impl<S: SegmentSink> HexagonView<S> {
    pub fn new(sink: S, hexagon: Hexagon, style: ViewStyle) -> Self {
        let mut view = Self {
            sink,
            hexagon,
            style,
            outline: vec![],
            fill: vec![],
        };
        view.redraw();
        view
    }

    pub fn hexagon(&self) -> &Hexagon {
        &self.hexagon
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn fill_visible(&self) -> bool {
        self.style.draw_fill
    }

    /// Number of segments this view has drawn and not yet removed
    pub fn live_segments(&self) -> usize {
        self.outline.len() + self.fill.len()
    }

    pub fn apply(&mut self, transform: Transform) {
        self.hexagon.apply(transform);
        self.redraw();
    }

    pub fn set_fill_visible(&mut self, draw_fill: bool) {
        if self.style.draw_fill != draw_fill {
            self.style.draw_fill = draw_fill;
            self.redraw();
        }
    }

    fn clear(&mut self) {
        let Self { sink, outline, fill, .. } = self;
        fill.drain(..)
            .chain(outline.drain(..))
            .for_each(|handle| sink.remove_segment(handle));
    }

    fn redraw(&mut self) {
        self.clear();

        let Self { sink, hexagon, style, outline, fill } = self;

        // fill first so the outline ends up on top
        if style.draw_fill {
            fill.extend(
                hexagon
                    .triangles()
                    .flat_map(|triangle| triangle.spans().clip_rows(style.visible_rows()))
                    .map(|span| {
                        let (from, to) = span.endpoints();
                        sink.draw_segment(from, to, style.fill)
                    }),
            );
        }
        outline.extend(
            hexagon
                .edges()
                .map(|(from, to)| sink.draw_segment(from, to, style.outline)),
        );

        trace!(
            "redrew hexagon at {:?}: {} edges, {} spans",
            hexagon.centroid(),
            outline.len(),
            fill.len(),
        );
    }
}

impl<S: SegmentSink> Drop for HexagonView<S> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::basic::assert_close;
    use crate::shape::{DEFAULT_VERTICES, VERTEX_COUNT};

    /// Owns nothing itself so the test can inspect it after the view is gone
    #[derive(Default, Clone)]
    pub struct Recorder {
        live: Rc<RefCell<HashMap<u64, (Point, Point, Stroke)>>>,
        next_id: Rc<RefCell<u64>>,
        removed: Rc<RefCell<usize>>,
    }

    pub struct RecordedId(u64);

    impl Recorder {
        pub fn live(&self) -> usize {
            self.live.borrow().len()
        }

        pub fn removed(&self) -> usize {
            *self.removed.borrow()
        }

        pub fn segments_with(&self, stroke: Stroke) -> Vec<(Point, Point)> {
            self.live
                .borrow()
                .values()
                .filter(|(_, _, s)| *s == stroke)
                .map(|&(from, to, _)| (from, to))
                .collect()
        }
    }

    impl SegmentSink for Recorder {
        type Handle = RecordedId;

        fn draw_segment(&mut self, from: Point, to: Point, stroke: Stroke) -> RecordedId {
            let mut next_id = self.next_id.borrow_mut();
            let id = *next_id;
            *next_id += 1;
            self.live.borrow_mut().insert(id, (from, to, stroke));
            RecordedId(id)
        }

        fn remove_segment(&mut self, RecordedId(id): RecordedId) {
            assert!(self.live.borrow_mut().remove(&id).is_some(), "segment {id} removed twice");
            *self.removed.borrow_mut() += 1;
        }
    }

    pub fn style() -> ViewStyle {
        ViewStyle {
            outline: Stroke { color: Color::BLACK, thickness: 1. },
            fill: Stroke { color: Color::RED, thickness: 1. },
            draw_fill: true,
            scene_size: Point::new(550., 550.),
        }
    }

    fn expected_spans(hexagon: &Hexagon) -> usize {
        hexagon.triangles().map(|t| t.spans().len()).sum()
    }

    #[test]
    fn test_initial_draw() {
        let recorder = Recorder::default();
        let view = HexagonView::new(recorder.clone(), Hexagon::default(), style());

        // rows 11..=20 for the first triangle, 11..=30 for the others
        assert_eq!(expected_spans(view.hexagon()), 10 + 20 + 20 + 20);
        assert_eq!(recorder.live(), VERTEX_COUNT + 70);
        assert_eq!(view.live_segments(), recorder.live());
        assert_eq!(recorder.segments_with(style().outline).len(), VERTEX_COUNT);
        assert!(recorder
            .segments_with(style().fill)
            .iter()
            .all(|(from, to)| from.y == to.y && from.x <= to.x));
    }

    #[test]
    fn test_no_segments_accumulate() {
        let recorder = Recorder::default();
        let mut view = HexagonView::new(recorder.clone(), Hexagon::default(), style());
        let transforms = [
            Transform::Translate(Point::new(10., 0.)),
            Transform::Rotate(std::f32::consts::PI / 12.),
            Transform::Scale(1.3),
            Transform::Scale(0.7),
            Transform::Translate(Point::new(0., -10.)),
            Transform::Rotate(-1.),
        ];
        for transform in transforms {
            view.apply(transform);
            let expected = VERTEX_COUNT + expected_spans(view.hexagon());
            assert_eq!(recorder.live(), expected);
            assert_eq!(view.live_segments(), expected);
        }
    }

    #[test]
    fn test_drop_releases_everything() {
        let recorder = Recorder::default();
        let mut view = HexagonView::new(recorder.clone(), Hexagon::default(), style());
        view.apply(Transform::Scale(2.));
        assert!(recorder.live() > 0);
        drop(view);
        assert_eq!(recorder.live(), 0);
        assert!(recorder.removed() > 0);
    }

    #[test]
    fn test_outline_follows_vertices() {
        let recorder = Recorder::default();
        let mut view = HexagonView::new(recorder.clone(), Hexagon::default(), style());
        view.apply(Transform::Translate(Point::new(30., 0.)));

        let mut outline = recorder.segments_with(style().outline);
        outline.sort_by(|a, b| a.0.x.total_cmp(&b.0.x).then(a.0.y.total_cmp(&b.0.y)));
        let mut expected = view.hexagon().edges().collect::<Vec<_>>();
        expected.sort_by(|a, b| a.0.x.total_cmp(&b.0.x).then(a.0.y.total_cmp(&b.0.y)));
        assert_eq!(outline, expected);
        assert_close(expected[0].0, DEFAULT_VERTICES[5] + Point::new(30., 0.));
    }

    #[test]
    fn test_fill_stays_inside_the_scene() {
        let recorder = Recorder::default();
        let mut view = HexagonView::new(recorder.clone(), Hexagon::default(), style());
        for _ in 0..60 {
            view.apply(Transform::Scale(1.3));
        }
        let rows = 550 + 1;
        assert!(view.live_segments() <= VERTEX_COUNT + 4 * rows);
        assert_eq!(view.live_segments(), recorder.live());
        assert!(recorder
            .segments_with(style().fill)
            .iter()
            .all(|(from, _)| (0. ..=550.).contains(&from.y)));

        let mut above = HexagonView::new(recorder.clone(), Hexagon::default(), style());
        above.apply(Transform::Translate(Point::new(0., -100.)));
        assert_eq!(above.live_segments(), VERTEX_COUNT);
    }

    #[test]
    fn test_toggle_fill() {
        let recorder = Recorder::default();
        let mut view = HexagonView::new(recorder.clone(), Hexagon::default(), style());
        view.set_fill_visible(false);
        assert!(!view.fill_visible());
        assert_eq!(recorder.live(), VERTEX_COUNT);
        view.set_fill_visible(true);
        assert_eq!(recorder.live(), VERTEX_COUNT + 70);
    }
}
