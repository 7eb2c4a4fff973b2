//! Document: the live object set of one page.
//!
//! The document owns the [`ObjectRegistry`], the page's top-level draw
//! list and the parent links of grouped members. Its structural
//! operations never record history; user actions that should be undoable
//! go through [`EditorState`](crate::editor_state::EditorState), and
//! commands replaying history call these operations directly.

mod conversion;
mod structure;

use crate::model::{EditableObject, LineShape, ObjectKind, ObjectShape};
use crate::registry::ObjectRegistry;
use prototyper_core::{ObjectId, RegistryError, Result, Segment};
use std::collections::HashMap;

/// The object the line or polyline tool is currently editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveTarget {
    Line(ObjectId),
    Polyline(ObjectId),
}

/// Where an object sits: in the page's top-level list or inside a group.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Page(usize),
    Member { group: ObjectId, index: usize },
}

/// An object taken out of the document together with the slot it occupied.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedObject {
    pub object: EditableObject,
    pub slot: Slot,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    registry: ObjectRegistry,
    page: Vec<ObjectId>,
    parents: HashMap<ObjectId, ObjectId>,
    active_target: Option<ActiveTarget>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn find(&self, id: &ObjectId) -> Option<&EditableObject> {
        self.registry.find(id)
    }

    pub fn find_mut(&mut self, id: &ObjectId) -> Option<&mut EditableObject> {
        self.registry.find_mut(id)
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.registry.contains(id)
    }

    /// Returns the number of live objects, grouped members included.
    pub fn object_count(&self) -> usize {
        self.registry.len()
    }

    /// Top-level objects in insertion order.
    pub fn top_level(&self) -> &[ObjectId] {
        &self.page
    }

    pub fn parent_of(&self, id: &ObjectId) -> Option<&ObjectId> {
        self.parents.get(id)
    }

    /// All live identifiers sorted bottom to top by draw order.
    pub fn draw_order(&self) -> Vec<ObjectId> {
        let mut objects: Vec<&EditableObject> = self.registry.iter().collect();
        objects.sort_by(|a, b| {
            a.z.total_cmp(&b.z)
                .then_with(|| a.object_id().cmp(b.object_id()))
        });
        objects.into_iter().map(|o| o.object_id().clone()).collect()
    }

    /// Lowest and highest draw order on the page.
    pub fn z_range(&self) -> Option<(f64, f64)> {
        self.registry.iter().map(|o| o.z).fold(None, |range, z| match range {
            None => Some((z, z)),
            Some((lo, hi)) => Some((lo.min(z), hi.max(z))),
        })
    }

    fn next_z(&self) -> f64 {
        self.z_range().map_or(0.0, |(_, hi)| hi + 1.0)
    }

    /// Creates a default element of `kind` under `id`, or under a freshly
    /// minted identifier when `id` is `None`.
    ///
    /// # Errors
    ///
    /// Fails when `id` is already registered.
    pub fn create_element(&mut self, kind: ObjectKind, id: Option<ObjectId>) -> Result<ObjectId> {
        self.insert_shape(id, ObjectShape::default_for(kind))
    }

    /// Registers a top-level object with the given shape above everything else.
    pub fn insert_shape(&mut self, id: Option<ObjectId>, shape: ObjectShape) -> Result<ObjectId> {
        let id = match id {
            Some(id) if self.registry.contains(&id) => {
                return Err(RegistryError::DuplicateId { id }.into());
            }
            Some(id) => id,
            None => self.registry.mint_id(),
        };
        self.insert_object(EditableObject::new(id, shape))
    }

    /// Registers a fully built object as a top-level object on top of the
    /// draw order.
    pub fn insert_object(&mut self, mut object: EditableObject) -> Result<ObjectId> {
        object.z = self.next_z();
        let id = object.object_id().clone();
        self.registry.register(object)?;
        self.page.push(id.clone());
        tracing::debug!("Created {}", id);
        Ok(id)
    }

    /// Creates a line under `id` (or a fresh identifier).
    pub fn add_line(&mut self, id: Option<ObjectId>, line: Segment) -> Result<ObjectId> {
        self.insert_shape(id, ObjectShape::Line(LineShape::new(line)))
    }

    pub fn set_z(&mut self, id: &ObjectId, z: f64) -> bool {
        match self.registry.find_mut(id) {
            Some(obj) => {
                obj.z = z;
                true
            }
            None => false,
        }
    }

    pub fn show_handles(&mut self, id: &ObjectId) -> bool {
        self.set_handles_visible(id, true)
    }

    pub fn hide_handles(&mut self, id: &ObjectId) -> bool {
        self.set_handles_visible(id, false)
    }

    fn set_handles_visible(&mut self, id: &ObjectId, visible: bool) -> bool {
        match self.registry.find_mut(id) {
            Some(obj) => {
                obj.handles_visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn active_target(&self) -> Option<&ActiveTarget> {
        self.active_target.as_ref()
    }

    /// Marks `id` as the line tool's edit target, replacing any other target.
    pub fn set_current_line(&mut self, id: &ObjectId) {
        self.active_target = Some(ActiveTarget::Line(id.clone()));
    }

    /// Marks `id` as the polyline tool's edit target, replacing any other target.
    pub fn set_current_polyline(&mut self, id: &ObjectId) {
        self.active_target = Some(ActiveTarget::Polyline(id.clone()));
    }

    pub fn current_line(&self) -> Option<&ObjectId> {
        match &self.active_target {
            Some(ActiveTarget::Line(id)) => Some(id),
            _ => None,
        }
    }

    pub fn current_polyline(&self) -> Option<&ObjectId> {
        match &self.active_target {
            Some(ActiveTarget::Polyline(id)) => Some(id),
            _ => None,
        }
    }

    fn forget_target(&mut self, id: &ObjectId) {
        let targets_id = match &self.active_target {
            Some(ActiveTarget::Line(t)) | Some(ActiveTarget::Polyline(t)) => t == id,
            None => false,
        };
        if targets_id {
            self.active_target = None;
        }
    }

    fn slot_of(&self, id: &ObjectId) -> Option<Slot> {
        match self.parents.get(id) {
            Some(group) => {
                let index = self.registry.find(group)?.as_group()?.position_of(id)?;
                Some(Slot::Member {
                    group: group.clone(),
                    index,
                })
            }
            None => self.page.iter().position(|p| p == id).map(Slot::Page),
        }
    }

    /// Takes `id` out of its container and returns the slot it occupied.
    fn detach(&mut self, id: &ObjectId) -> Option<Slot> {
        let slot = self.slot_of(id)?;
        match &slot {
            Slot::Page(index) => {
                self.page.remove(*index);
            }
            Slot::Member { group, .. } => {
                if let Some(g) = self.registry.find_mut(group).and_then(|o| o.as_group_mut()) {
                    g.remove_member(id);
                }
            }
        }
        self.parents.remove(id);
        Some(slot)
    }

    /// Puts `id` into `slot`. A member slot whose group no longer exists
    /// falls back to the top of the page.
    fn attach(&mut self, id: ObjectId, slot: Slot) {
        match slot {
            Slot::Page(index) => {
                let index = index.min(self.page.len());
                self.page.insert(index, id);
            }
            Slot::Member { group, index } => {
                match self.registry.find_mut(&group).and_then(|o| o.as_group_mut()) {
                    Some(g) => {
                        if !g.contains(&id) {
                            g.insert_member(index, id.clone());
                        }
                        self.parents.insert(id, group);
                    }
                    None => {
                        tracing::debug!("Group {} is gone, placing {} on the page", group, id);
                        self.page.push(id);
                    }
                }
            }
        }
    }
}
