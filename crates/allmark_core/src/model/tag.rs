//! Tag value type.
//!
//! # Responsibility
//! - Normalize tag names into a stable map key.
//! - Keep tag parsing rules in one place for items and the tag index.
//!
//! # Invariants
//! - A `Tag` name is never blank.
//! - Tag names are trimmed and lowercased, so two tags with the same
//!   normalized name are the same key.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Normalized label attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Creates a tag from a raw name.
    ///
    /// # Errors
    /// - Returns `TagError::Empty` when `name` is blank after trim.
    pub fn new(name: impl AsRef<str>) -> Result<Self, TagError> {
        normalize_tag_name(name.as_ref())
            .map(|name| Self { name })
            .ok_or(TagError::Empty)
    }

    /// Normalized display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Tag::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Tag parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Tag name is blank after trim.
    Empty,
}

impl Display for TagError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "tag name must not be blank"),
        }
    }
}

impl Error for TagError {}

/// Normalizes one tag name: trimmed and lowercased, `None` when blank.
pub fn normalize_tag_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Parses raw tag names in order.
///
/// Duplicates are kept; the stored order is what tag views are built from.
pub fn parse_tags<S: AsRef<str>>(names: &[S]) -> Result<Vec<Tag>, TagError> {
    names.iter().map(Tag::new).collect()
}
