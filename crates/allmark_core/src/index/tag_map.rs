//! Reverse index from tags to the items carrying them.
//!
//! # Responsibility
//! - Track tag membership incrementally as items are loaded and unloaded.
//!
//! # Invariants
//! - A tag key is present iff its item list is non-empty.
//! - `add` indexes the item's own tags; `remove` scans every indexed tag so
//!   entries left behind by since-edited metadata are still cleaned up.
//! - Callers serialize writes; `&mut self` is the only guard.

use crate::index::item_list::ItemList;
use crate::model::item::Item;
use crate::model::tag::Tag;
use log::debug;
use std::collections::BTreeMap;

/// Tag index keyed by normalized tag, iterated in tag order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    entries: BTreeMap<Tag, ItemList>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `item` under every tag in its metadata.
    pub fn add(&mut self, item: &Item) {
        for tag in &item.meta_data.tags {
            match self.entries.get_mut(tag) {
                Some(list) => {
                    list.add(item.id);
                }
                None => {
                    self.entries.insert(tag.clone(), ItemList::new(item.id));
                }
            }
        }

        debug!(
            "event=tag_index_add module=index status=ok item={} tags={} indexed_tags={}",
            item.id,
            item.meta_data.tags.len(),
            self.entries.len()
        );
    }

    /// Removes `item` from every indexed tag and drops emptied tags.
    ///
    /// Removing an item that was never indexed is a no-op.
    pub fn remove(&mut self, item: &Item) {
        let before = self.entries.len();
        self.entries.retain(|_, list| {
            list.remove(item.id);
            !list.is_empty()
        });

        debug!(
            "event=tag_index_remove module=index status=ok item={} dropped_tags={} indexed_tags={}",
            item.id,
            before - self.entries.len(),
            self.entries.len()
        );
    }

    /// Items indexed under `tag`, if any.
    pub fn items(&self, tag: &Tag) -> Option<&ItemList> {
        self.entries.get(tag)
    }

    pub fn contains_tag(&self, tag: &Tag) -> bool {
        self.entries.contains_key(tag)
    }

    /// Indexed tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &ItemList)> {
        self.entries.iter()
    }

    /// Number of indexed tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
