//! Domain model for the content repository and its view projection.
//!
//! # Responsibility
//! - Define the item tree produced by content loading.
//! - Define the view models produced by the mapper.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - View models are immutable once built and shared through `Arc`.

pub mod item;
pub mod tag;
pub mod view;
