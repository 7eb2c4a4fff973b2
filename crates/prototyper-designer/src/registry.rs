use crate::model::EditableObject;
use prototyper_core::{ObjectId, RegistryError};
use std::collections::HashMap;

/// Maps stable identifiers to the live object currently representing them.
///
/// `ObjectRegistry` is responsible for:
/// - Registering objects at creation and deregistering them at destruction
/// - Resolving identifiers to the current live object
/// - Minting fresh identifiers that are not live
///
/// # Identity model
///
/// At most one object is live per identifier. An identifier may be reused
/// sequentially (deregister the old object, register a new one) but never
/// concurrently: [`ObjectRegistry::register`] rejects a live identifier.
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    objects: HashMap<ObjectId, EditableObject>,
}

impl ObjectRegistry {
    /// Creates an empty registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use prototyper_designer::registry::ObjectRegistry;
    ///
    /// let registry = ObjectRegistry::new();
    /// assert!(registry.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the live object registered under `id`, if any.
    pub fn find(&self, id: &ObjectId) -> Option<&EditableObject> {
        self.objects.get(id)
    }

    pub fn find_mut(&mut self, id: &ObjectId) -> Option<&mut EditableObject> {
        self.objects.get_mut(id)
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Registers `object` under its own identifier.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateId`] when the identifier is already live.
    pub fn register(&mut self, object: EditableObject) -> Result<(), RegistryError> {
        let id = object.object_id().clone();
        if self.objects.contains_key(&id) {
            return Err(RegistryError::DuplicateId { id });
        }
        self.objects.insert(id, object);
        Ok(())
    }

    /// Removes and returns the object registered under `id`.
    pub fn deregister(&mut self, id: &ObjectId) -> Option<EditableObject> {
        self.objects.remove(id)
    }

    /// Mints an identifier that is not live in this registry.
    pub fn mint_id(&self) -> ObjectId {
        loop {
            let id = ObjectId::generate();
            if !self.objects.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EditableObject> {
        self.objects.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ObjectId> {
        self.objects.keys()
    }
}
