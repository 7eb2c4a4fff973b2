//! Pen, brush and draw order commands.

use super::resolve;
use crate::document::Document;
use prototyper_core::{Brush, ObjectId, Pen};

#[derive(Debug, Clone, PartialEq)]
pub struct ChangePen {
    pub id: ObjectId,
    pub old_pen: Pen,
    pub new_pen: Pen,
}

impl ChangePen {
    pub fn new(id: ObjectId, old_pen: Pen, new_pen: Pen) -> Self {
        Self {
            id,
            old_pen,
            new_pen,
        }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        if let Some(object) = resolve(doc, &self.id, "Change pen") {
            object.set_object_pen(self.new_pen);
        }
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        if let Some(object) = resolve(doc, &self.id, "Change pen") {
            object.set_object_pen(self.old_pen);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeBrush {
    pub id: ObjectId,
    pub old_brush: Brush,
    pub new_brush: Brush,
}

impl ChangeBrush {
    pub fn new(id: ObjectId, old_brush: Brush, new_brush: Brush) -> Self {
        Self {
            id,
            old_brush,
            new_brush,
        }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        if let Some(object) = resolve(doc, &self.id, "Change brush") {
            object.set_object_brush(self.new_brush);
        }
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        if let Some(object) = resolve(doc, &self.id, "Change brush") {
            object.set_object_brush(self.old_brush);
        }
    }
}

/// Batch draw order change. Identifiers deleted since the change are
/// skipped; the rest still receive their values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeZ {
    pub old: Vec<(ObjectId, f64)>,
    pub new: Vec<(ObjectId, f64)>,
}

impl ChangeZ {
    pub fn new(old: Vec<(ObjectId, f64)>, new: Vec<(ObjectId, f64)>) -> Self {
        debug_assert_eq!(old.len(), new.len(), "z change lists differ in length");
        Self { old, new }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        apply_orders(doc, &self.new);
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        apply_orders(doc, &self.old);
    }
}

fn apply_orders(doc: &mut Document, orders: &[(ObjectId, f64)]) {
    for (id, z) in orders {
        if !doc.set_z(id, *z) {
            tracing::debug!("Change z: {} no longer exists, skipping", id);
        }
    }
}
