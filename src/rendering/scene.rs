use std::collections::BTreeMap;

use ggez::graphics::{Mesh, MeshBuilder};
use ggez::Context;
use log::warn;

use crate::basic::Point;
use crate::error::{ErrorConversion, Result};
use crate::rendering::segments::{SegmentSink, Stroke};

// segments shorter than this don't produce any pixels
const MIN_LENGTH: f32 = 1e-3;

/// Refers to exactly one segment in a [`Scene`]
#[derive(Debug, Eq, PartialEq)]
pub struct SegmentId(u64);

#[derive(Copy, Clone, Debug)]
struct Segment {
    from: Point,
    to: Point,
    stroke: Stroke,
}

impl Segment {
    fn is_visible(&self) -> bool {
        self.from.distance_to(self.to) > MIN_LENGTH && self.stroke.thickness > 0.
    }
}

/// Retained line segments, drawn in the order they were added.
///
/// The mesh is only rebuilt on the first draw after a change.
#[derive(Default)]
pub struct Scene {
    segments: BTreeMap<u64, Segment>,
    next_id: u64,

    dirty: bool,
    cached_mesh: Option<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn visible_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values().filter(|segment| segment.is_visible())
    }

    /// `None` when there is nothing to draw
    pub fn mesh(&mut self, ctx: &Context) -> Result<Option<&Mesh>> {
        if let Some(builder) = self.take_changes().with_trace_step("Scene::mesh")? {
            let first_visible = self.visible_segments().next().map(|_| ());
            self.cached_mesh = match first_visible {
                Some(_) => Some(Mesh::from_data(ctx, builder.build())),
                None => None,
            };
        }
        Ok(self.cached_mesh.as_ref())
    }

    /// Lines for a new mesh if anything changed since the last call
    fn take_changes(&mut self) -> Result<Option<MeshBuilder>> {
        if !self.dirty {
            return Ok(None);
        }
        let mut builder = MeshBuilder::new();
        for Segment { from, to, stroke } in self.visible_segments() {
            builder.line(&[*from, *to], stroke.thickness, stroke.color)?;
        }
        self.dirty = false;
        Ok(Some(builder))
    }
}

impl SegmentSink for Scene {
    type Handle = SegmentId;

    fn draw_segment(&mut self, from: Point, to: Point, stroke: Stroke) -> SegmentId {
        let id = self.next_id;
        self.next_id += 1;
        self.segments.insert(id, Segment { from, to, stroke });
        self.dirty = true;
        SegmentId(id)
    }

    fn remove_segment(&mut self, SegmentId(id): SegmentId) {
        match self.segments.remove(&id) {
            Some(_) => self.dirty = true,
            None => warn!("tried to remove unknown segment {id}"),
        }
    }
}
