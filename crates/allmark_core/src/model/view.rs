//! Presentation view models.
//!
//! # Responsibility
//! - Define the render-ready projection handed to the templating layer.
//! - Keep the serialized field names stable (`camelCase`).
//!
//! # Invariants
//! - `children` mirrors the source item's children in order and count,
//!   except for error nodes which never have children.
//! - `geo_location` is always populated, with empty fields when the item
//!   carries no geo data.

use serde::Serialize;
use std::sync::Arc;

/// Item type reported by diagnostic view models.
pub const ERROR_VIEW_TYPE: &str = "error";

/// Tag entry rendered next to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagView {
    pub name: String,
    pub absolute_route: String,
}

/// Display-ready geo data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoView {
    /// `title, city, country`, or empty unless title and city are set.
    pub place_name: String,
    /// `street, postcode, city, country`, empty parts included.
    pub address: String,
    /// `lat; lon`, or empty unless both are set.
    pub coordinates: String,

    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
    pub map_type: String,
    pub zoom: u32,
}

/// Projection of one item and, transitively, its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub level: usize,
    pub relative_route: String,
    pub absolute_route: String,
    pub title: String,
    pub description: String,
    pub content: String,
    /// Two-letter language code, e.g. `de`.
    pub language_tag: String,
    pub creation_date: String,
    pub last_modified_date: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub tags: Vec<TagView>,
    /// Resolved location items, projected without children.
    pub locations: Vec<ViewModel>,
    pub geo_location: GeoView,
    pub children: Vec<Arc<ViewModel>>,
}

impl ViewModel {
    /// Builds a diagnostic node that still carries the item's real routes.
    pub fn error(
        title: impl Into<String>,
        description: impl Into<String>,
        relative_route: impl Into<String>,
        absolute_route: impl Into<String>,
    ) -> Self {
        Self {
            relative_route: relative_route.into(),
            absolute_route: absolute_route.into(),
            title: title.into(),
            description: description.into(),
            item_type: ERROR_VIEW_TYPE.to_string(),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.item_type == ERROR_VIEW_TYPE
    }

    /// Iterates this model and all child models in depth-first pre-order.
    ///
    /// Location models are not part of the tree and are not visited.
    pub fn walk(&self) -> impl Iterator<Item = &ViewModel> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let model = stack.pop()?;
            stack.extend(model.children.iter().rev().map(Arc::as_ref));
            Some(model)
        })
    }

    /// Number of tree nodes, including `self`.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }
}
