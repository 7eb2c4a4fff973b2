use prototyper_core::ObjectId;
use serde::{Deserialize, Serialize};

/// A group has no geometry of its own, only its ordered member identifiers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupShape {
    members: Vec<ObjectId>,
}

impl GroupShape {
    pub fn new(members: Vec<ObjectId>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[ObjectId] {
        &self.members
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.members.contains(id)
    }

    pub fn position_of(&self, id: &ObjectId) -> Option<usize> {
        self.members.iter().position(|m| m == id)
    }

    pub(crate) fn insert_member(&mut self, index: usize, id: ObjectId) {
        let index = index.min(self.members.len());
        self.members.insert(index, id);
    }

    pub(crate) fn remove_member(&mut self, id: &ObjectId) -> Option<usize> {
        let index = self.position_of(id)?;
        self.members.remove(index);
        Some(index)
    }

    pub(crate) fn replace_member(&mut self, index: usize, with: Vec<ObjectId>) {
        if index < self.members.len() {
            self.members.splice(index..=index, with);
        }
    }
}
