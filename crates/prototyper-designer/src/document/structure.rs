//! Grouping, duplication and deletion.

use super::{Document, RemovedObject, Slot};
use crate::model::{EditableObject, GroupShape, ObjectShape};
use prototyper_core::{ModelError, ObjectId, Point, RegistryError, Result};

impl Document {
    /// Groups `items` under `id` (or a freshly minted identifier).
    ///
    /// The group takes the slot of the first item; the other items leave
    /// their containers. Members stay registered and keep their draw order;
    /// the group is ordered with its topmost member.
    pub fn group(&mut self, items: &[ObjectId], id: Option<ObjectId>) -> Result<ObjectId> {
        let mut members: Vec<ObjectId> = Vec::with_capacity(items.len());
        for item in items {
            if !self.registry.contains(item) {
                return Err(RegistryError::NotFound { id: item.clone() }.into());
            }
            if !members.contains(item) {
                members.push(item.clone());
            }
        }
        let Some(first) = members.first().cloned() else {
            return Err(ModelError::EmptyGroup.into());
        };

        let group_id = match id {
            Some(id) if self.registry.contains(&id) => {
                return Err(RegistryError::DuplicateId { id }.into());
            }
            Some(id) => id,
            None => self.registry.mint_id(),
        };

        let z = members
            .iter()
            .filter_map(|m| self.registry.find(m))
            .map(|o| o.z)
            .fold(f64::NEG_INFINITY, f64::max);

        let Some(slot) = self.detach(&first) else {
            return Err(RegistryError::NotFound { id: first }.into());
        };
        for member in members.iter().skip(1) {
            self.detach(member);
        }

        let mut group = EditableObject::new(
            group_id.clone(),
            ObjectShape::Group(GroupShape::new(members.clone())),
        );
        group.z = z;
        self.registry.register(group)?;
        for member in &members {
            self.parents.insert(member.clone(), group_id.clone());
        }
        self.attach(group_id.clone(), slot);

        tracing::debug!("Grouped {} objects into {}", members.len(), group_id);
        Ok(group_id)
    }

    /// Destroys the group `id`, handing its members to the group's container
    /// at the group's slot. Returns the member identifiers.
    pub fn ungroup(&mut self, id: &ObjectId) -> Result<Vec<ObjectId>> {
        let members = match self.registry.find(id) {
            None => return Err(RegistryError::NotFound { id: id.clone() }.into()),
            Some(obj) => match obj.as_group() {
                Some(group) => group.members().to_vec(),
                None => {
                    return Err(ModelError::VariantMismatch {
                        id: id.clone(),
                        expected: "Group".to_string(),
                        found: obj.kind().to_string(),
                    }
                    .into())
                }
            },
        };

        let slot = self.slot_of(id);
        for member in &members {
            self.parents.remove(member);
        }
        match slot {
            Some(Slot::Page(index)) => {
                self.page.splice(index..=index, members.iter().cloned());
            }
            Some(Slot::Member { group, index }) => {
                if let Some(g) = self.registry.find_mut(&group).and_then(|o| o.as_group_mut()) {
                    g.replace_member(index, members.clone());
                }
                for member in &members {
                    self.parents.insert(member.clone(), group.clone());
                }
            }
            None => self.page.extend(members.iter().cloned()),
        }
        self.parents.remove(id);
        self.registry.deregister(id);
        self.forget_target(id);

        tracing::debug!("Ungrouped {} into {} objects", id, members.len());
        Ok(members)
    }

    /// Live members of group `id`; empty when `id` is not a live group.
    pub fn children_of(&self, id: &ObjectId) -> Vec<ObjectId> {
        self.registry
            .find(id)
            .and_then(|o| o.as_group())
            .map(|g| {
                g.members()
                    .iter()
                    .filter(|m| self.registry.contains(m))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Clones `id` under a fresh identifier, offset by `(dx, dy)`, as a new
    /// top-level object on top of the draw order. Groups are cloned with
    /// fresh copies of their members.
    pub fn duplicate(&mut self, id: &ObjectId, dx: f64, dy: f64) -> Result<ObjectId> {
        let copy_id = self.duplicate_subtree(id, dx, dy)?;
        let z = self.next_z();
        self.set_z(&copy_id, z);
        self.page.push(copy_id.clone());
        tracing::debug!("Duplicated {} as {}", id, copy_id);
        Ok(copy_id)
    }

    fn duplicate_subtree(&mut self, id: &ObjectId, dx: f64, dy: f64) -> Result<ObjectId> {
        let source = self
            .registry
            .find(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() })?;
        let copy_id = self.registry.mint_id();
        let mut copy = source.duplicate(copy_id.clone());
        let Point { x, y } = source.position();
        copy.set_position(Point::new(x + dx, y + dy));

        if let Some(group) = source.as_group() {
            let mut member_copies = Vec::with_capacity(group.members().len());
            for member in group.members() {
                if self.registry.contains(member) {
                    member_copies.push(self.duplicate_subtree(member, dx, dy)?);
                }
            }
            for member in &member_copies {
                self.parents.insert(member.clone(), copy_id.clone());
            }
            copy.shape = ObjectShape::Group(GroupShape::new(member_copies));
        }

        self.registry.register(copy)?;
        Ok(copy_id)
    }

    /// Deregisters and destroys `items`. Deleting a group deletes its
    /// members; deleting a member removes it from its group, and a group
    /// left without members is deleted too. Identifiers that do not
    /// resolve are skipped.
    ///
    /// Never records history. The returned snapshots are ordered children
    /// before their containers, so [`Document::restore`] in reverse order
    /// rebuilds the exact structure.
    pub fn delete_items(&mut self, items: &[ObjectId]) -> Vec<RemovedObject> {
        let mut removed = Vec::new();
        for id in items {
            if !self.registry.contains(id) {
                tracing::debug!("Skipping delete of {}: not registered", id);
                continue;
            }
            match self.detach(id) {
                Some(slot) => {
                    let container = match &slot {
                        Slot::Member { group, .. } => Some(group.clone()),
                        Slot::Page(_) => None,
                    };
                    self.remove_subtree(id, slot, &mut removed);
                    if let Some(group) = container {
                        self.remove_if_empty(&group, &mut removed);
                    }
                }
                None => {
                    debug_assert!(false, "registered object {} has no slot", id);
                    tracing::error!("Object {} is registered but has no slot", id);
                }
            }
        }
        removed
    }

    /// Deletes `group` once its last member is gone, cascading upwards.
    fn remove_if_empty(&mut self, group: &ObjectId, removed: &mut Vec<RemovedObject>) {
        let empty = self
            .registry
            .find(group)
            .and_then(|o| o.as_group())
            .is_some_and(|g| g.members().is_empty());
        if !empty {
            return;
        }
        let parent = self.parents.get(group).cloned();
        if let Some(slot) = self.detach(group) {
            tracing::debug!("Removing empty group {}", group);
            self.remove_subtree(group, slot, removed);
            if let Some(parent) = parent {
                self.remove_if_empty(&parent, removed);
            }
        }
    }

    fn remove_subtree(&mut self, id: &ObjectId, slot: Slot, removed: &mut Vec<RemovedObject>) {
        let Some(object) = self.registry.deregister(id) else {
            return;
        };
        self.parents.remove(id);
        self.forget_target(id);
        if let Some(group) = object.as_group() {
            for (index, member) in group.members().iter().enumerate() {
                let member_slot = Slot::Member {
                    group: id.clone(),
                    index,
                };
                self.remove_subtree(member, member_slot, removed);
            }
        }
        removed.push(RemovedObject { object, slot });
    }

    /// Puts back objects returned by [`Document::delete_items`].
    ///
    /// Pass the snapshots in reverse deletion order.
    ///
    /// # Errors
    ///
    /// Fails when the snapshot's identifier has become live again.
    pub fn restore(&mut self, removed: &RemovedObject) -> Result<()> {
        let id = removed.object.object_id().clone();
        self.registry.register(removed.object.clone())?;
        self.attach(id, removed.slot.clone());
        Ok(())
    }
}
