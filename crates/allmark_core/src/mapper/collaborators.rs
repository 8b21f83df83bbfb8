//! Capabilities the projector consumes from the surrounding application.
//!
//! # Responsibility
//! - Define item lookup, route computation and content rendering seams.
//! - Provide simple in-memory implementations for wiring and tests.
//!
//! # Invariants
//! - Implementations must be deterministic for a given item.
//! - A resolver returning `None` is a valid, silent outcome.

use crate::model::item::Item;
use crate::model::tag::Tag;
use std::collections::HashMap;

/// Looks up an item by reference string (its route).
pub trait ItemResolver {
    fn resolve(&self, reference: &str) -> Option<&Item>;
}

/// Computes the routes the view layer links to.
pub trait RouteComputer {
    /// Route relative to the repository root.
    fn relative_route(&self, item: &Item) -> String;
    /// Absolute route used in links.
    fn absolute_route(&self, item: &Item) -> String;
    /// Absolute route of a tag listing.
    fn tag_route(&self, tag: &Tag) -> String;
}

/// Renders an item's body for display.
///
/// Must not change the item's type or tags as seen by the projection.
pub trait ContentRenderer {
    fn render(&self, item: &Item) -> String;
}

impl<T: ItemResolver + ?Sized> ItemResolver for &T {
    fn resolve(&self, reference: &str) -> Option<&Item> {
        (**self).resolve(reference)
    }
}

impl<T: RouteComputer + ?Sized> RouteComputer for &T {
    fn relative_route(&self, item: &Item) -> String {
        (**self).relative_route(item)
    }

    fn absolute_route(&self, item: &Item) -> String {
        (**self).absolute_route(item)
    }

    fn tag_route(&self, tag: &Tag) -> String {
        (**self).tag_route(tag)
    }
}

impl<F> ContentRenderer for F
where
    F: Fn(&Item) -> String,
{
    fn render(&self, item: &Item) -> String {
        self(item)
    }
}

/// Route-indexed view over an item tree.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog<'a> {
    items: HashMap<&'a str, &'a Item>,
}

impl<'a> ItemCatalog<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `root` and every descendant by route.
    pub fn from_root(root: &'a Item) -> Self {
        let mut catalog = Self::new();
        for item in root.walk() {
            catalog.insert(item);
        }
        catalog
    }

    /// Indexes one item. The first item registered for a route wins.
    pub fn insert(&mut self, item: &'a Item) {
        self.items.entry(item.route.as_str()).or_insert(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemResolver for ItemCatalog<'_> {
    fn resolve(&self, reference: &str) -> Option<&Item> {
        self.items.get(reference).copied()
    }
}

/// Routes rooted at a fixed base URL.
///
/// - relative route: the item route
/// - absolute route: `<base>/<route>`
/// - tag route: `<base>/tags.html#<tag>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRoutes {
    base_url: String,
}

impl PrefixRoutes {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl RouteComputer for PrefixRoutes {
    fn relative_route(&self, item: &Item) -> String {
        item.route.clone()
    }

    fn absolute_route(&self, item: &Item) -> String {
        self.join(&item.route)
    }

    fn tag_route(&self, tag: &Tag) -> String {
        self.join(&format!("tags.html#{}", tag.name()))
    }
}

/// Renderer that passes `raw_content` through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawContent;

impl ContentRenderer for RawContent {
    fn render(&self, item: &Item) -> String {
        item.raw_content.clone()
    }
}
