//! Group, ungroup, duplicate and delete commands.

use crate::document::{Document, RemovedObject};
use prototyper_core::ObjectId;

/// Groups a set of objects under a fixed group identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupItems {
    pub group_id: ObjectId,
    /// Members as of the last undo; re-derived from the live group each time.
    pub member_ids: Vec<ObjectId>,
}

impl GroupItems {
    pub fn new(group_id: ObjectId, member_ids: Vec<ObjectId>) -> Self {
        Self {
            group_id,
            member_ids,
        }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        let members: Vec<ObjectId> = self
            .member_ids
            .iter()
            .filter(|id| doc.contains(id))
            .cloned()
            .collect();
        if members.is_empty() {
            tracing::debug!("Group {}: no member resolves, skipping", self.group_id);
            return;
        }
        if let Err(e) = doc.group(&members, Some(self.group_id.clone())) {
            tracing::error!("Failed to regroup {}: {}", self.group_id, e);
        }
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        if !doc.contains(&self.group_id) {
            tracing::debug!("Group {} no longer exists, skipping ungroup", self.group_id);
            return;
        }
        self.member_ids = doc.children_of(&self.group_id);
        if let Err(e) = doc.ungroup(&self.group_id) {
            tracing::warn!("Failed to ungroup {}: {}", self.group_id, e);
        }
    }
}

/// Dissolves a group, remembering its members and identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct UngroupItems {
    pub member_ids: Vec<ObjectId>,
    pub group_id: ObjectId,
}

impl UngroupItems {
    pub fn new(member_ids: Vec<ObjectId>, group_id: ObjectId) -> Self {
        Self {
            member_ids,
            group_id,
        }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        if !doc.contains(&self.group_id) {
            tracing::debug!("Group {} no longer exists, skipping ungroup", self.group_id);
            return;
        }
        if let Err(e) = doc.ungroup(&self.group_id) {
            tracing::warn!("Failed to ungroup {}: {}", self.group_id, e);
        }
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        let members: Vec<ObjectId> = self
            .member_ids
            .iter()
            .filter(|id| {
                let live = doc.contains(id);
                if !live {
                    tracing::debug!("Ungroup: member {} no longer exists, skipping", id);
                }
                live
            })
            .cloned()
            .collect();
        if members.is_empty() {
            return;
        }
        if let Err(e) = doc.group(&members, Some(self.group_id.clone())) {
            tracing::error!("Failed to regroup {}: {}", self.group_id, e);
        }
    }
}

/// Clones objects offset by one grid step in both directions.
///
/// Every redo produces fresh identifiers and replaces `duplicate_ids`.
#[derive(Debug, Clone, PartialEq)]
pub struct Duplicate {
    pub original_ids: Vec<ObjectId>,
    pub duplicate_ids: Vec<ObjectId>,
    pub offset: f64,
}

impl Duplicate {
    pub fn new(original_ids: Vec<ObjectId>, duplicate_ids: Vec<ObjectId>, offset: f64) -> Self {
        Self {
            original_ids,
            duplicate_ids,
            offset,
        }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        let mut copies = Vec::with_capacity(self.original_ids.len());
        for original in &self.original_ids {
            if !doc.contains(original) {
                tracing::debug!("Duplicate: {} no longer exists, skipping", original);
                continue;
            }
            match doc.duplicate(original, self.offset, self.offset) {
                Ok(copy) => copies.push(copy),
                Err(e) => tracing::error!("Failed to duplicate {}: {}", original, e),
            }
        }
        self.duplicate_ids = copies;
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        let removed = doc.delete_items(&self.duplicate_ids);
        tracing::debug!("Removed {} duplicated objects", removed.len());
    }
}

/// Deletes objects, keeping snapshots so undo can put them back in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteItems {
    pub ids: Vec<ObjectId>,
    /// Snapshots from the last deletion, children before containers.
    pub removed: Vec<RemovedObject>,
}

impl DeleteItems {
    pub fn new(ids: Vec<ObjectId>, removed: Vec<RemovedObject>) -> Self {
        Self { ids, removed }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        self.removed = doc.delete_items(&self.ids);
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        for snapshot in self.removed.iter().rev() {
            if let Err(e) = doc.restore(snapshot) {
                tracing::warn!(
                    "Cannot restore {}: {}",
                    snapshot.object.object_id(),
                    e
                );
            }
        }
    }
}
