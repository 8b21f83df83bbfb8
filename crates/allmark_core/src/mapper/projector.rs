//! Recursive item-to-view-model projection.
//!
//! # Responsibility
//! - Convert an item tree into a view-model tree of the same shape.
//! - Resolve location references into nested location models.
//! - Record every projected tree node in the view-model cache.
//!
//! # Invariants
//! - Projection never fails; unknown item types become error nodes that keep
//!   the item's real routes and have no children.
//! - Child order and count follow the source item.
//! - Location models are one level deep: no children, no locations.
//! - Recursion depth equals tree depth. The tree must be acyclic.

use crate::mapper::cache::ViewModelCache;
use crate::mapper::collaborators::{ContentRenderer, ItemResolver, RouteComputer};
use crate::mapper::format::{format_date, two_letter_language_code_or, DEFAULT_LANGUAGE};
use crate::mapper::geo::derive_geo_view;
use crate::mapper::tags::tag_views;
use crate::model::item::{Item, ItemId, Location};
use crate::model::view::ViewModel;
use log::debug;
use std::sync::Arc;
use std::time::Instant;

/// Title of the diagnostic node emitted for unknown item types.
pub const UNRECOGNIZED_TYPE_TITLE: &str = "Item type not recognized";

/// Projects items through injected lookup, routing and rendering capabilities.
pub struct Projector<R, T, C> {
    resolver: R,
    routes: T,
    renderer: C,
    fallback_language: String,
    cache: ViewModelCache,
}

impl<R, T, C> Projector<R, T, C>
where
    R: ItemResolver,
    T: RouteComputer,
    C: ContentRenderer,
{
    pub fn new(resolver: R, routes: T, renderer: C) -> Self {
        Self {
            resolver,
            routes,
            renderer,
            fallback_language: DEFAULT_LANGUAGE.to_string(),
            cache: ViewModelCache::new(),
        }
    }

    /// Language code used when an item declares none.
    pub fn with_fallback_language(mut self, language: impl Into<String>) -> Self {
        self.fallback_language = language.into();
        self
    }

    /// Projects `item` and its whole subtree.
    ///
    /// # Side effects
    /// - Stores each projected node in the cache, replacing older entries.
    pub fn project(&mut self, item: &Item) -> Arc<ViewModel> {
        let started_at = Instant::now();
        let cached_before = self.cache.len();
        let model = self.project_tree(item);
        debug!(
            "event=project_tree module=mapper status=ok root={} nodes={} new_cache_entries={} duration_ms={}",
            item.route,
            model.node_count(),
            self.cache.len() - cached_before,
            started_at.elapsed().as_millis()
        );
        model
    }

    /// Projects the locations an item references, skipping unresolved ones.
    pub fn resolve_locations(&self, locations: &[Location]) -> Vec<ViewModel> {
        locations
            .iter()
            .filter_map(|location| match self.resolver.resolve(location.as_str()) {
                Some(target) => Some(self.item_model(target)),
                None => {
                    debug!(
                        "event=resolve_location module=mapper status=skipped reference={}",
                        location
                    );
                    None
                }
            })
            .collect()
    }

    /// Last projection recorded for `id`.
    pub fn cached(&self, id: ItemId) -> Option<Arc<ViewModel>> {
        self.cache.get(id)
    }

    pub fn cache(&self) -> &ViewModelCache {
        &self.cache
    }

    pub fn into_cache(self) -> ViewModelCache {
        self.cache
    }

    fn project_tree(&mut self, item: &Item) -> Arc<ViewModel> {
        let item_type = &item.meta_data.item_type;
        let model = if item_type.is_recognized() {
            let mut model = self.item_model(item);
            model.locations = self.resolve_locations(&item.meta_data.locations);
            model.children = item
                .children
                .iter()
                .map(|child| self.project_tree(child))
                .collect();
            model
        } else {
            debug!(
                "event=project_item module=mapper status=unrecognized route={} item_type={}",
                item.route, item_type
            );
            ViewModel {
                level: item.level,
                ..ViewModel::error(
                    UNRECOGNIZED_TYPE_TITLE,
                    format!(
                        "There is no mapper available for items of type {:?}",
                        item_type.as_str()
                    ),
                    self.routes.relative_route(item),
                    self.routes.absolute_route(item),
                )
            }
        };

        let model = Arc::new(model);
        self.cache.insert(item.id, Arc::clone(&model));
        model
    }

    /// Single-item projection without locations or children.
    fn item_model(&self, item: &Item) -> ViewModel {
        let meta = &item.meta_data;
        ViewModel {
            level: item.level,
            relative_route: self.routes.relative_route(item),
            absolute_route: self.routes.absolute_route(item),
            title: item.title.clone(),
            description: item.description.clone(),
            content: self.renderer.render(item),
            language_tag: two_letter_language_code_or(&meta.language, &self.fallback_language),
            creation_date: format_date(meta.creation_date),
            last_modified_date: format_date(meta.last_modified_date),
            item_type: meta.item_type.as_str().to_string(),
            tags: tag_views(item, &self.routes),
            locations: Vec::new(),
            geo_location: derive_geo_view(item),
            children: Vec::new(),
        }
    }
}
