//! Line ⇄ polyline conversion and polyline node edits.
//!
//! Converting changes an object's variant but never its identifier: the old
//! object is destroyed and a new one is registered under the same id, in
//! the same slot, with the same draw order, pen, brush and position.

use super::Document;
use crate::model::{LineShape, NodeSegments, ObjectShape, PolylineShape};
use prototyper_core::{ModelError, ObjectId, RegistryError, Result, Segment};

impl Document {
    /// Adds `segment` to the line or polyline `id`.
    ///
    /// A line is promoted to a polyline holding its original segment
    /// followed by `segment`. The result becomes the active polyline. Handles
    /// are shown unless the polyline is now closed.
    pub fn append_segment(&mut self, id: &ObjectId, segment: Segment) -> Result<()> {
        let object = self
            .registry
            .find(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() })?;

        let closed = match &object.shape {
            ObjectShape::Line(line) => {
                let polyline = PolylineShape::new(vec![line.line(), segment]);
                let closed = polyline.is_closed();
                self.replace_shape(id, ObjectShape::Polyline(polyline))?;
                closed
            }
            ObjectShape::Polyline(_) => {
                let object = self
                    .registry
                    .find_mut(id)
                    .ok_or_else(|| RegistryError::NotFound { id: id.clone() })?;
                let polyline = object.as_polyline_mut()?;
                polyline.append_line(segment);
                polyline.is_closed()
            }
            _ => {
                return Err(ModelError::VariantMismatch {
                    id: id.clone(),
                    expected: "Line or Polyline".to_string(),
                    found: object.kind().to_string(),
                }
                .into())
            }
        };

        self.set_current_polyline(id);
        if closed {
            self.hide_handles(id);
        } else {
            self.show_handles(id);
        }
        Ok(())
    }

    /// Removes `segment` from the polyline `id`.
    ///
    /// When a single segment remains the polyline collapses into a line
    /// with that segment, which becomes the active line. Otherwise it stays
    /// the active polyline. Handles are shown in both cases.
    pub fn remove_segment(&mut self, id: &ObjectId, segment: &Segment) -> Result<()> {
        let object = self
            .registry
            .find_mut(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() })?;
        let polyline = object.as_polyline_mut()?;
        if !polyline.remove_line(segment) {
            return Err(ModelError::SegmentNotFound { id: id.clone() }.into());
        }

        match polyline.lines() {
            [remaining] => {
                let line = LineShape::new(*remaining);
                self.replace_shape(id, ObjectShape::Line(line))?;
                self.show_handles(id);
                self.set_current_line(id);
            }
            [] => {
                tracing::error!("Polyline {} lost its last segment", id);
            }
            _ => {
                self.show_handles(id);
                self.set_current_polyline(id);
            }
        }
        Ok(())
    }

    /// Writes the segments adjacent to node `index` of polyline `id` back
    /// at their captured positions.
    ///
    /// The node is checked against the chain length rather than the current
    /// node count, so a drag that opened or closed the polyline replays in
    /// both directions.
    pub fn move_node(&mut self, id: &ObjectId, index: usize, segments: NodeSegments) -> Result<()> {
        let object = self
            .registry
            .find_mut(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() })?;
        let polyline = object.as_polyline_mut()?;
        if index > polyline.count_of_lines() || !polyline.replace_segments(&segments) {
            return Err(ModelError::NodeOutOfRange {
                id: id.clone(),
                index,
                node_count: polyline.node_count(),
            }
            .into());
        }
        Ok(())
    }

    /// Destroys the object `id` and registers a new object with `shape`
    /// under the same identifier.
    fn replace_shape(&mut self, id: &ObjectId, shape: ObjectShape) -> Result<()> {
        let old = self
            .registry
            .deregister(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() })?;
        let replacement = old.with_shape(shape);
        tracing::debug!("Replacing {} {} with {}", old.kind(), id, replacement.kind());
        self.registry.register(replacement)?;
        Ok(())
    }
}
