//! Side table of projected view models keyed by item identity.
//!
//! The item tree belongs to content loading, so projections are cached here
//! instead of being written back onto items.

use crate::model::item::ItemId;
use crate::model::view::ViewModel;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ViewModelCache {
    models: HashMap<ItemId, Arc<ViewModel>>,
}

impl ViewModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `model` for `id`, replacing any earlier projection.
    pub fn insert(&mut self, id: ItemId, model: Arc<ViewModel>) -> Option<Arc<ViewModel>> {
        self.models.insert(id, model)
    }

    pub fn get(&self, id: ItemId) -> Option<Arc<ViewModel>> {
        self.models.get(&id).cloned()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.models.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn clear(&mut self) {
        self.models.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::ViewModelCache;
    use crate::model::view::ViewModel;
    use std::sync::Arc;
    use uuid::Uuid;

    fn model(title: &str) -> Arc<ViewModel> {
        Arc::new(ViewModel {
            title: title.to_string(),
            ..ViewModel::default()
        })
    }

    #[test]
    fn insert_replaces_previous_projection() {
        let id = Uuid::new_v4();
        let mut cache = ViewModelCache::new();
        assert!(cache.is_empty());

        assert!(cache.insert(id, model("first")).is_none());
        let replaced = cache.insert(id, model("second")).expect("old entry returned");
        assert_eq!(replaced.title, "first");
        assert_eq!(cache.get(id).expect("cached").title, "second");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_drops_every_entry() {
        let id = Uuid::new_v4();
        let mut cache = ViewModelCache::new();
        cache.insert(id, model("doc"));
        assert!(cache.contains(id));

        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains(id));
        assert!(cache.get(id).is_none());
    }
}
