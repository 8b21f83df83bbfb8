//! Ordered item membership list used by the tag index.

use crate::model::item::ItemId;

/// Insertion-ordered, duplicate-free list of item ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    ids: Vec<ItemId>,
}

impl ItemList {
    /// Creates a list containing only `id`.
    pub fn new(id: ItemId) -> Self {
        Self { ids: vec![id] }
    }

    /// Appends `id` unless already present.
    ///
    /// Returns whether the list changed. Repeated adds are idempotent.
    pub fn add(&mut self, id: ItemId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes `id` if present. Returns whether the list changed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.ids.iter().position(|current| *current == id) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    pub fn as_slice(&self) -> &[ItemId] {
        &self.ids
    }
}
