//! Repository item model.
//!
//! # Responsibility
//! - Define the content tree consumed by the projector and the tag index.
//! - Keep item type parsing total so unknown types survive as data.
//!
//! # Invariants
//! - A parent owns its children; child order is significant.
//! - `level` equals the distance from the root once the tree is assembled
//!   through `push_child`.
//! - Missing geo fields are empty strings, never an "unset" marker.

use crate::model::tag::Tag;
use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one repository item.
pub type ItemId = Uuid;

/// Manifest string value for presentation items.
pub const ITEM_TYPE_PRESENTATION: &str = "presentation";
/// Manifest string value for repository root items.
pub const ITEM_TYPE_REPOSITORY: &str = "repository";
/// Manifest string value for document items.
pub const ITEM_TYPE_DOCUMENT: &str = "document";
/// Manifest string value for message items.
pub const ITEM_TYPE_MESSAGE: &str = "message";
/// Manifest string value for location items.
pub const ITEM_TYPE_LOCATION: &str = "location";

/// Item category declared in item metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemType {
    Presentation,
    /// Root of a content repository.
    Repository,
    Document,
    Message,
    Location,
    /// Any type value outside the known set, kept verbatim.
    Unrecognized(String),
}

impl ItemType {
    /// Parses a raw type value. Never fails: unknown values are kept as
    /// `Unrecognized`.
    pub fn from_name(value: &str) -> Self {
        match value.trim() {
            ITEM_TYPE_PRESENTATION => Self::Presentation,
            ITEM_TYPE_REPOSITORY => Self::Repository,
            ITEM_TYPE_DOCUMENT => Self::Document,
            ITEM_TYPE_MESSAGE => Self::Message,
            ITEM_TYPE_LOCATION => Self::Location,
            _ => Self::Unrecognized(value.to_string()),
        }
    }

    /// Stable string id (or the raw value for unrecognized types).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Presentation => ITEM_TYPE_PRESENTATION,
            Self::Repository => ITEM_TYPE_REPOSITORY,
            Self::Document => ITEM_TYPE_DOCUMENT,
            Self::Message => ITEM_TYPE_MESSAGE,
            Self::Location => ITEM_TYPE_LOCATION,
            Self::Unrecognized(value) => value.as_str(),
        }
    }

    /// Whether a projection exists for this type.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl Display for ItemType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named pointer from one item to another item acting as its location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geographic metadata attached 1:1 to an item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoInformation {
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
    /// Map rendering type, e.g. `roadmap` or `satellite`.
    pub map_type: String,
    /// Map zoom level; `0` when unset.
    pub zoom: u32,
}

/// Item metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaData {
    /// Free-form language value, e.g. `de-DE`.
    pub language: String,
    pub creation_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
    pub item_type: ItemType,
    /// Tags in stored order. Duplicates are allowed.
    pub tags: Vec<Tag>,
    /// Location references in declaration order.
    pub locations: Vec<Location>,
    pub geo_data: GeoInformation,
}

impl MetaData {
    /// Creates empty metadata for the given item type.
    pub fn new(item_type: ItemType) -> Self {
        Self {
            language: String::new(),
            creation_date: None,
            last_modified_date: None,
            item_type,
            tags: Vec::new(),
            locations: Vec::new(),
            geo_data: GeoInformation::default(),
        }
    }
}

/// One node of the content repository tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Repository-relative name used to resolve location references.
    pub route: String,
    pub title: String,
    pub description: String,
    /// Unrendered body, handed to the content renderer as-is.
    pub raw_content: String,
    /// Distance from the repository root.
    pub level: usize,
    pub meta_data: MetaData,
    pub children: Vec<Item>,
}

impl Item {
    /// Creates a root-level item with a generated stable ID.
    pub fn new(route: impl Into<String>, item_type: ItemType) -> Self {
        Self::with_id(Uuid::new_v4(), route, item_type)
    }

    /// Creates a root-level item with a caller-provided stable ID.
    pub fn with_id(id: ItemId, route: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id,
            route: route.into(),
            title: String::new(),
            description: String::new(),
            raw_content: String::new(),
            level: 0,
            meta_data: MetaData::new(item_type),
            children: Vec::new(),
        }
    }

    /// Appends a child and re-levels its subtree below this item.
    pub fn push_child(&mut self, mut child: Item) {
        child.set_level(self.level + 1);
        self.children.push(child);
    }

    /// Iterates this item and all descendants in depth-first pre-order.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Number of items in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    fn set_level(&mut self, level: usize) {
        self.level = level;
        for child in &mut self.children {
            child.set_level(level + 1);
        }
    }
}

/// Pre-order iterator returned by [`Item::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a Item>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        self.stack.extend(item.children.iter().rev());
        Some(item)
    }
}
