//! Line and polyline geometry commands.

use super::resolve;
use crate::document::Document;
use crate::model::NodeSegments;
use prototyper_core::{Error, ObjectId, Segment};

/// Logs a failed conversion. A missing target is an expected dangling
/// reference; anything else means the object was not in the state the
/// command was recorded against.
fn report(action: &str, id: &ObjectId, err: Error) {
    if err.is_not_found() {
        tracing::debug!("{}: {} no longer exists, skipping", action, id);
    } else if err.is_variant_mismatch() {
        tracing::warn!("{}: {}", action, err);
    } else {
        tracing::error!("{}: {}", action, err);
    }
}

/// Adds a segment to a line or polyline, promoting a line to a polyline
/// and collapsing it back on undo.
#[derive(Debug, Clone, PartialEq)]
pub struct AddLineToPolyline {
    pub target_id: ObjectId,
    pub segment: Segment,
}

impl AddLineToPolyline {
    pub fn new(target_id: ObjectId, segment: Segment) -> Self {
        Self { target_id, segment }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        if let Err(e) = doc.append_segment(&self.target_id, self.segment) {
            report("Add line", &self.target_id, e);
        }
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        if let Err(e) = doc.remove_segment(&self.target_id, &self.segment) {
            report("Remove line", &self.target_id, e);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeLine {
    pub id: ObjectId,
    pub old_line: Segment,
    pub new_line: Segment,
}

impl ChangeLine {
    pub fn new(id: ObjectId, old_line: Segment, new_line: Segment) -> Self {
        Self {
            id,
            old_line,
            new_line,
        }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        self.set(doc, self.new_line);
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        self.set(doc, self.old_line);
    }

    fn set(&self, doc: &mut Document, line: Segment) {
        let Some(object) = resolve(doc, &self.id, "Change line") else {
            return;
        };
        match object.as_line_mut() {
            Ok(shape) => shape.set_line(line),
            Err(e) => {
                tracing::warn!("Change line: {}", e);
                return;
            }
        }
        // Handles follow the endpoints; re-showing them refreshes placement.
        doc.show_handles(&self.id);
    }
}

/// Moves one node of a polyline by swapping the segments on either side.
#[derive(Debug, Clone, PartialEq)]
pub struct EditPolyNode {
    pub id: ObjectId,
    pub index: usize,
    pub old: NodeSegments,
    pub new: NodeSegments,
}

impl EditPolyNode {
    pub fn new(id: ObjectId, index: usize, old: NodeSegments, new: NodeSegments) -> Self {
        Self { id, index, old, new }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        if let Err(e) = doc.move_node(&self.id, self.index, self.new) {
            report("Edit node", &self.id, e);
        }
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        if let Err(e) = doc.move_node(&self.id, self.index, self.old) {
            report("Edit node", &self.id, e);
        }
    }
}
